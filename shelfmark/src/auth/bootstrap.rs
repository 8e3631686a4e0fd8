use super::error::AuthError;
use super::models::{Role, User, UserSnapshot};
use super::password::{ensure_hashed, verify_password_blocking};
use super::repository::UserRepository;
use tracing::info;
use uuid::Uuid;

/// The one identity that can still log in when the user store is down.
///
/// The secret is hashed once at construction; login attempts are compared
/// against that hash through the normal constant-time verify path, never
/// against plaintext.
pub struct OfflineAdmin {
    user_id: String,
    username: String,
    password_hash: String,
}

impl OfflineAdmin {
    pub fn new(username: &str, password: &str) -> Result<Self, AuthError> {
        Ok(Self {
            user_id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password_hash: ensure_hashed(password)?,
        })
    }

    pub fn matches_username(&self, username: &str) -> bool {
        self.username == username
    }

    pub async fn verify(&self, password: &str) -> Result<bool, AuthError> {
        verify_password_blocking(password.to_string(), self.password_hash.clone()).await
    }

    pub fn snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
            display_name: None,
            role: Role::Admin,
        }
    }
}

/// Make sure the well-known administrative account exists.
///
/// Idempotent: an existing record is left exactly as found. In particular
/// its password is never reset or re-hashed on restart, so an operator who
/// changed it keeps their change.
pub async fn ensure_default_admin(
    repo: &dyn UserRepository,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    if repo.find_by_username(username).await?.is_some() {
        info!("admin user already exists: {}", username);
        return Ok(());
    }

    let password_hash = ensure_hashed(password)?;
    let admin = User::new(username.to_string(), password_hash, Role::Admin);
    repo.create(admin).await?;

    info!("default admin user created: {}", username);
    Ok(())
}
