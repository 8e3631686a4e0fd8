use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WALLPAPER: &str = "/images/default-wallpaper.jpg";
pub const DEFAULT_LANGUAGE: &str = "zh-TW";
pub const DEFAULT_BOOKMARKS_PER_PAGE: u32 = 20;
pub const MIN_BOOKMARKS_PER_PAGE: u32 = 5;
pub const MAX_BOOKMARKS_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Auto,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

/// Per-user display preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_id: String,
    pub wallpaper: String,
    pub theme: Theme,
    pub language: String,
    pub layout: Layout,
    pub bookmarks_per_page: u32,
    pub custom_css: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    /// The defaults a user starts with before ever touching settings
    pub fn defaults_for(user_id: &str) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.to_string(),
            wallpaper: DEFAULT_WALLPAPER.to_string(),
            theme: Theme::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            layout: Layout::default(),
            bookmarks_per_page: DEFAULT_BOOKMARKS_PER_PAGE,
            custom_css: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial settings update; absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub wallpaper: Option<String>,
    pub theme: Option<Theme>,
    pub language: Option<String>,
    pub layout: Option<Layout>,
    pub bookmarks_per_page: Option<u32>,
    pub custom_css: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = UserSettings::defaults_for("user-1");

        assert_eq!(settings.wallpaper, DEFAULT_WALLPAPER);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.layout, Layout::Grid);
        assert_eq!(settings.language, "zh-TW");
        assert_eq!(settings.bookmarks_per_page, 20);
        assert!(settings.custom_css.is_empty());
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Auto).unwrap(), "\"auto\"");
        assert_eq!(serde_json::to_string(&Layout::List).unwrap(), "\"list\"");

        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
