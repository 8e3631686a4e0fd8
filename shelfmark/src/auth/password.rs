use argon2::password_hash::rand_core::OsRng;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::error::AuthError;

/// Hash a password using Argon2 with secure defaults
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verify a password against a hash using constant-time comparison
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(_) => Ok(false),
    }
}

/// Whether a stored value is already a PHC-format Argon2 hash.
pub fn is_password_hash(value: &str) -> bool {
    value.starts_with("$argon2")
}

/// Hash a secret unless it is already hashed. Re-saving a record whose
/// secret went through the hashing path once must never hash it twice.
pub fn ensure_hashed(secret: &str) -> Result<String, AuthError> {
    if is_password_hash(secret) {
        Ok(secret.to_string())
    } else {
        hash_password(secret)
    }
}

/// Hash on the blocking pool so Argon2 work never stalls request workers.
pub async fn hash_password_blocking(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?
}

/// Verify on the blocking pool; see [`hash_password_blocking`].
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?
}
