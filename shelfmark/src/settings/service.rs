use super::error::SettingsError;
use super::models::{
    SettingsPatch, UserSettings, MAX_BOOKMARKS_PER_PAGE, MIN_BOOKMARKS_PER_PAGE,
};
use super::repository::SettingsRepository;
use chrono::Utc;
use std::sync::Arc;

pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Load a user's settings, materializing the defaults on first access
    pub async fn get_or_create(&self, user_id: &str) -> Result<UserSettings, SettingsError> {
        if let Some(settings) = self.repo.get(user_id).await? {
            return Ok(settings);
        }

        self.repo.save(UserSettings::defaults_for(user_id)).await
    }

    /// Apply a partial update to a user's settings
    pub async fn update(
        &self,
        user_id: &str,
        patch: SettingsPatch,
    ) -> Result<UserSettings, SettingsError> {
        let mut settings = self.get_or_create(user_id).await?;

        if let Some(wallpaper) = patch.wallpaper {
            validate_wallpaper(&wallpaper)?;
            settings.wallpaper = wallpaper;
        }
        if let Some(theme) = patch.theme {
            settings.theme = theme;
        }
        if let Some(language) = patch.language {
            settings.language = language;
        }
        if let Some(layout) = patch.layout {
            settings.layout = layout;
        }
        if let Some(per_page) = patch.bookmarks_per_page {
            if !(MIN_BOOKMARKS_PER_PAGE..=MAX_BOOKMARKS_PER_PAGE).contains(&per_page) {
                return Err(SettingsError::Validation(format!(
                    "bookmarks_per_page must be between {} and {}",
                    MIN_BOOKMARKS_PER_PAGE, MAX_BOOKMARKS_PER_PAGE
                )));
            }
            settings.bookmarks_per_page = per_page;
        }
        if let Some(custom_css) = patch.custom_css {
            settings.custom_css = custom_css;
        }
        settings.updated_at = Utc::now();

        self.repo.save(settings).await
    }

    /// Change just the wallpaper
    pub async fn set_wallpaper(
        &self,
        user_id: &str,
        wallpaper: String,
    ) -> Result<UserSettings, SettingsError> {
        self.update(
            user_id,
            SettingsPatch {
                wallpaper: Some(wallpaper),
                ..Default::default()
            },
        )
        .await
    }
}

fn validate_wallpaper(wallpaper: &str) -> Result<(), SettingsError> {
    if wallpaper.is_empty() {
        return Err(SettingsError::Validation(
            "wallpaper url must not be empty".to_string(),
        ));
    }
    Ok(())
}
