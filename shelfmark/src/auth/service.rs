use super::bootstrap::OfflineAdmin;
use super::error::AuthError;
use super::models::{Role, User, UserSnapshot};
use super::password::{hash_password_blocking, verify_password_blocking};
use super::repository::UserRepository;
use super::session::{Session, SessionToken};
use super::session_store::{SessionRepository, SessionStore};
use std::sync::Arc;
use tracing::{info, warn};

const MIN_USERNAME_LEN: usize = 3;
const MAX_USERNAME_LEN: usize = 30;
const MIN_PASSWORD_LEN: usize = 6;

pub struct AuthService<S: SessionRepository> {
    users: Arc<dyn UserRepository>,
    sessions: Arc<SessionStore<S>>,
    offline_admin: OfflineAdmin,
    session_ttl_ms: u64,
}

impl<S: SessionRepository> AuthService<S> {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<SessionStore<S>>,
        offline_admin: OfflineAdmin,
        session_ttl_ms: u64,
    ) -> Self {
        Self {
            users,
            sessions,
            offline_admin,
            session_ttl_ms,
        }
    }

    /// Authenticate a user by username and password and open a session.
    ///
    /// Unknown usernames and wrong passwords produce the same error, in
    /// the return value and in the logs.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        let found = match self.users.find_by_username(username).await {
            Ok(found) => found,
            Err(AuthError::StoreUnavailable) => {
                return self.login_offline(username, password).await;
            }
            Err(e) => return Err(e),
        };

        let user = found.ok_or(AuthError::InvalidCredentials)?;

        let is_valid =
            verify_password_blocking(password.to_string(), user.password_hash.clone()).await?;
        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        // Login already succeeded; bookkeeping failure must not undo it.
        if let Err(e) = self.users.record_login(&user.id).await {
            warn!("failed to record login for user {}: {}", user.id, e);
        }

        let session = self
            .sessions
            .create_session(UserSnapshot::from(&user), self.session_ttl_ms)
            .await?;

        info!("user logged in: {}", session.user.username);
        Ok(session)
    }

    /// Narrow fallback for an unreachable store: only the well-known admin
    /// identity is evaluated, everyone else fails closed.
    async fn login_offline(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        warn!("user store unreachable, evaluating offline fallback");

        if !self.offline_admin.matches_username(username) {
            return Err(AuthError::InvalidCredentials);
        }

        if !self.offline_admin.verify(password).await? {
            return Err(AuthError::InvalidCredentials);
        }

        let session = self
            .sessions
            .create_session(self.offline_admin.snapshot(), self.session_ttl_ms)
            .await?;

        info!("offline admin session established");
        Ok(session)
    }

    /// Register a new account and log it in immediately.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Session, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        validate_registration(username, password, confirm_password)?;

        if self.users.username_exists(username).await? {
            return Err(AuthError::DuplicateUsername);
        }

        let password_hash = hash_password_blocking(password.to_string()).await?;
        let user = User::new(username.to_string(), password_hash, Role::User);

        // The store enforces uniqueness atomically, so a racing duplicate
        // registration still comes back as DuplicateUsername here.
        let user = self.users.create(user).await?;

        let session = self
            .sessions
            .create_session(UserSnapshot::from(&user), self.session_ttl_ms)
            .await?;

        info!("new user registered: {}", session.user.username);
        Ok(session)
    }

    /// Destroy a session. Always succeeds from the caller's perspective;
    /// a failing destroy is logged and swallowed.
    pub async fn logout(&self, token: &SessionToken) {
        match self.sessions.invalidate_session(token).await {
            Ok(true) => info!("session logged out"),
            Ok(false) => {}
            Err(e) => warn!("failed to destroy session: {}", e),
        }
    }

    /// Resolve the per-request identity from a session token.
    /// `None` means the caller is anonymous.
    pub async fn authenticate(&self, token: &SessionToken) -> Option<UserSnapshot> {
        match self.sessions.validate_session(token).await {
            Ok(session) => Some(session.user),
            Err(_) => None,
        }
    }

    /// Whether the credential store is currently reachable
    pub async fn store_reachable(&self) -> bool {
        self.users.ping().await.is_ok()
    }
}

fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), AuthError> {
    if password != confirm_password {
        return Err(AuthError::Validation("passwords do not match".to_string()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if username.len() < MIN_USERNAME_LEN {
        return Err(AuthError::Validation(format!(
            "username must be at least {} characters",
            MIN_USERNAME_LEN
        )));
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(AuthError::Validation(format!(
            "username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }
    Ok(())
}
