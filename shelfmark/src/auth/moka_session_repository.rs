use super::models::UserSnapshot;
use super::session::{generate_session_token, Session, SessionToken};
use super::session_store::SessionRepository;
use async_trait::async_trait;
use moka::future::Cache;
use shared::Result;
use std::time::Duration;

/// Moka-based in-memory session repository
pub struct MokaSessionRepository {
    // token -> session
    sessions: Cache<SessionToken, Session>,
}

impl MokaSessionRepository {
    /// Create a new Moka session repository with specified capacity and idle timeout.
    ///
    /// The cache-level time-to-idle is a backstop; the authoritative expiry
    /// lives on the [`Session`] itself and is checked on every read.
    pub fn new(max_sessions: Option<u64>, idle_timeout: Option<Duration>) -> Self {
        let mut builder = Cache::builder();

        if let Some(capacity) = max_sessions {
            builder = builder.max_capacity(capacity);
        }

        if let Some(ttl) = idle_timeout {
            builder = builder.time_to_idle(ttl);
        }

        Self {
            sessions: builder.build(),
        }
    }

    /// Create with default settings (unbounded, 24 hour idle timeout)
    pub fn with_defaults() -> Self {
        Self::new(None, Some(Duration::from_secs(24 * 3600)))
    }
}

#[async_trait]
impl SessionRepository for MokaSessionRepository {
    async fn create_session(&self, user: UserSnapshot, ttl_ms: u64) -> Result<Session> {
        let token = generate_session_token();
        let session = Session::new(token.clone(), user, ttl_ms);

        self.sessions.insert(token, session.clone()).await;

        Ok(session)
    }

    async fn get_session(&self, token: &SessionToken) -> Result<Session> {
        let session = self
            .sessions
            .get(token)
            .await
            .ok_or(shared::Error::NotFound)?;

        // Check if expired
        if session.is_expired() {
            self.sessions.invalidate(token).await;
            return Err(shared::Error::NotFound);
        }

        // Refresh expiry on access
        let mut updated = session;
        updated.touch();
        self.sessions.insert(token.clone(), updated.clone()).await;

        Ok(updated)
    }

    async fn delete_session(&self, token: &SessionToken) -> Result<bool> {
        let session = self.sessions.remove(token).await;
        Ok(session.is_some())
    }

    async fn session_exists(&self, token: &SessionToken) -> Result<bool> {
        if let Some(session) = self.sessions.get(token).await {
            Ok(!session.is_expired())
        } else {
            Ok(false)
        }
    }
}


#[allow(dead_code)]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::{Role, User};

    fn snapshot(username: &str) -> UserSnapshot {
        let user = User::new(username.to_string(), "hash".to_string(), Role::User);
        UserSnapshot::from(&user)
    }

    #[tokio::test]
    async fn test_create_and_validate_session() {
        let repo = MokaSessionRepository::with_defaults();

        // Create session
        let session = repo
            .create_session(snapshot("alice"), 3600000)
            .await
            .unwrap();
        assert!(!session.token.is_empty());

        // Validate session
        let retrieved = repo.get_session(&session.token).await.unwrap();
        assert_eq!(retrieved.user.username, "alice");
    }

    #[tokio::test]
    async fn test_delete_session() {
        let repo = MokaSessionRepository::with_defaults();

        let session = repo
            .create_session(snapshot("alice"), 3600000)
            .await
            .unwrap();

        // Delete session
        let deleted = repo.delete_session(&session.token).await.unwrap();
        assert!(deleted);

        // Should not exist anymore
        let result = repo.get_session(&session.token).await;
        assert!(result.is_err());

        // Deleting again reports nothing removed
        assert!(!repo.delete_session(&session.token).await.unwrap());
    }

    #[tokio::test]
    async fn test_session_expiration() {
        let repo = MokaSessionRepository::with_defaults();

        // Create session with 0ms TTL (immediately expired)
        let session = repo.create_session(snapshot("alice"), 0).await.unwrap();

        // Should be expired
        assert!(!repo.session_exists(&session.token).await.unwrap());
        assert!(repo.get_session(&session.token).await.is_err());
    }

    #[tokio::test]
    async fn test_access_refreshes_expiry() {
        let repo = MokaSessionRepository::with_defaults();

        let session = repo
            .create_session(snapshot("alice"), 5000)
            .await
            .unwrap();

        let touched = repo.get_session(&session.token).await.unwrap();
        assert!(touched.expires_at >= session.expires_at);
        assert!(touched.last_accessed >= session.last_accessed);
    }
}
