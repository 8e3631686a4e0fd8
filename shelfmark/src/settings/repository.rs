use super::error::SettingsError;
use super::models::UserSettings;
use async_trait::async_trait;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load a user's settings, if any have been stored
    async fn get(&self, user_id: &str) -> Result<Option<UserSettings>, SettingsError>;

    /// Store a user's settings, replacing any previous record
    async fn save(&self, settings: UserSettings) -> Result<UserSettings, SettingsError>;
}

/// Stand-in for when the settings store could not be opened.
pub struct UnavailableSettingsRepository;

#[async_trait]
impl SettingsRepository for UnavailableSettingsRepository {
    async fn get(&self, _user_id: &str) -> Result<Option<UserSettings>, SettingsError> {
        Err(SettingsError::StoreUnavailable)
    }

    async fn save(&self, _settings: UserSettings) -> Result<UserSettings, SettingsError> {
        Err(SettingsError::StoreUnavailable)
    }
}
