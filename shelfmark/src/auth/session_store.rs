use super::models::UserSnapshot;
use super::session::{Session, SessionToken};
use async_trait::async_trait;
use shared::Result;
use std::sync::Arc;

/// Trait for session storage operations
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Create a new session for the given user with the specified TTL
    async fn create_session(&self, user: UserSnapshot, ttl_ms: u64) -> Result<Session>;

    /// Get a session by token; a successful read refreshes the expiry
    async fn get_session(&self, token: &SessionToken) -> Result<Session>;

    /// Delete a session (logout)
    async fn delete_session(&self, token: &SessionToken) -> Result<bool>;

    /// Check if a session exists and has not expired
    async fn session_exists(&self, token: &SessionToken) -> Result<bool>;
}

/// Session store service
pub struct SessionStore<S: SessionRepository> {
    repository: Arc<S>,
}

impl<S: SessionRepository> SessionStore<S> {
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Create a new session for a user
    pub async fn create_session(&self, user: UserSnapshot, ttl_ms: u64) -> Result<Session> {
        self.repository.create_session(user, ttl_ms).await
    }

    /// Validate a session token and return the live session
    pub async fn validate_session(&self, token: &SessionToken) -> Result<Session> {
        self.repository.get_session(token).await
    }

    /// Invalidate a session (logout)
    pub async fn invalidate_session(&self, token: &SessionToken) -> Result<bool> {
        self.repository.delete_session(token).await
    }
}
