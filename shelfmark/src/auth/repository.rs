use super::error::AuthError;
use super::models::User;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; the store enforces username uniqueness atomically
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AuthError>;

    /// Check if a username exists
    async fn username_exists(&self, username: &str) -> Result<bool, AuthError>;

    /// Record a successful login: bump the counter and timestamp.
    /// Callers treat failure as best-effort.
    async fn record_login(&self, user_id: &str) -> Result<(), AuthError>;

    /// Reachability probe for health reporting
    async fn ping(&self) -> Result<(), AuthError>;
}

/// Stand-in repository for when the backing store could not be opened.
///
/// Every operation answers `StoreUnavailable`, which is exactly the signal
/// the auth service needs to switch to its narrow offline-admin fallback.
/// Injecting this instead of flipping a process-wide "connected" flag also
/// makes unreachability trivially reproducible in tests.
pub struct UnavailableUserRepository;

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn create(&self, _user: User) -> Result<User, AuthError> {
        Err(AuthError::StoreUnavailable)
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, AuthError> {
        Err(AuthError::StoreUnavailable)
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<User>, AuthError> {
        Err(AuthError::StoreUnavailable)
    }

    async fn username_exists(&self, _username: &str) -> Result<bool, AuthError> {
        Err(AuthError::StoreUnavailable)
    }

    async fn record_login(&self, _user_id: &str) -> Result<(), AuthError> {
        Err(AuthError::StoreUnavailable)
    }

    async fn ping(&self) -> Result<(), AuthError> {
        Err(AuthError::StoreUnavailable)
    }
}
