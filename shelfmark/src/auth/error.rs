use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username and password are required")]
    InvalidInput,

    #[error("{0}")]
    Validation(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("username is already taken")]
    DuplicateUsername,

    #[error("user store is unavailable")]
    StoreUnavailable,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("password hashing error: {0}")]
    PasswordHash(String),
}

impl From<sled::Error> for AuthError {
    // A failing embedded store is indistinguishable from an unreachable
    // one as far as the login path is concerned.
    fn from(_: sled::Error) -> Self {
        AuthError::StoreUnavailable
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Serialization(err.to_string())
    }
}

impl From<shared::Error> for AuthError {
    fn from(err: shared::Error) -> Self {
        AuthError::Storage(err.to_string())
    }
}
