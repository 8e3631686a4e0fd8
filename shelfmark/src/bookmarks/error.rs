use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("bookmark not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("bookmark store is unavailable")]
    StoreUnavailable,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<sled::Error> for BookmarkError {
    fn from(err: sled::Error) -> Self {
        BookmarkError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BookmarkError {
    fn from(err: serde_json::Error) -> Self {
        BookmarkError::Serialization(err.to_string())
    }
}
