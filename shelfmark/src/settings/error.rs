use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{0}")]
    Validation(String),

    #[error("settings store is unavailable")]
    StoreUnavailable,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<sled::Error> for SettingsError {
    fn from(err: sled::Error) -> Self {
        SettingsError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Serialization(err.to_string())
    }
}
