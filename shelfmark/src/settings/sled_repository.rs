use super::error::SettingsError;
use super::models::UserSettings;
use super::repository::SettingsRepository;
use async_trait::async_trait;
use sled::Db;
use std::path::Path;

const SETTINGS_TREE: &str = "user_settings";

#[derive(Clone)]
pub struct SledSettingsRepository {
    db: Db,
}

impl SledSettingsRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    fn settings_tree(&self) -> Result<sled::Tree, SettingsError> {
        Ok(self.db.open_tree(SETTINGS_TREE)?)
    }
}

#[async_trait]
impl SettingsRepository for SledSettingsRepository {
    async fn get(&self, user_id: &str) -> Result<Option<UserSettings>, SettingsError> {
        let tree = self.settings_tree()?;

        if let Some(data) = tree.get(user_id.as_bytes())? {
            let settings: UserSettings = serde_json::from_slice(&data)?;
            return Ok(Some(settings));
        }

        Ok(None)
    }

    async fn save(&self, settings: UserSettings) -> Result<UserSettings, SettingsError> {
        let tree = self.settings_tree()?;

        let json = serde_json::to_vec(&settings)?;
        tree.insert(settings.user_id.as_bytes(), json)?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SledSettingsRepository::new(temp_dir.path().join("settings.sled")).unwrap();

        assert!(repo.get("user-1").await.unwrap().is_none());

        let mut settings = UserSettings::defaults_for("user-1");
        settings.wallpaper = "/images/space.jpg".to_string();
        repo.save(settings).await.unwrap();

        let loaded = repo.get("user-1").await.unwrap().unwrap();
        assert_eq!(loaded.wallpaper, "/images/space.jpg");

        // One record per user
        assert!(repo.get("user-2").await.unwrap().is_none());
    }
}
