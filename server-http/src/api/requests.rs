use serde::Deserialize;
use shelfmark::bookmarks::{BookmarkPatch, NewBookmark};
use shelfmark::settings::{Layout, SettingsPatch, Theme};

/// Request body for login endpoint
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for registration endpoint
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

// === Bookmark models ===

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateBookmarkRequest> for NewBookmark {
    fn from(req: CreateBookmarkRequest) -> Self {
        Self {
            name: req.name,
            url: req.url,
            icon: req.icon,
            category: req.category,
            description: req.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookmarkRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<UpdateBookmarkRequest> for BookmarkPatch {
    fn from(req: UpdateBookmarkRequest) -> Self {
        Self {
            name: req.name,
            url: req.url,
            icon: req.icon,
            category: req.category,
            description: req.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteBookmarksRequest {
    pub bookmark_ids: Vec<String>,
}

/// Query parameters for the paginated bookmark listing
#[derive(Debug, Deserialize)]
pub struct BookmarkListParams {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub search: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

// === Settings models ===

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub wallpaper: Option<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub bookmarks_per_page: Option<u32>,
    #[serde(default)]
    pub custom_css: Option<String>,
}

impl From<UpdateSettingsRequest> for SettingsPatch {
    fn from(req: UpdateSettingsRequest) -> Self {
        Self {
            wallpaper: req.wallpaper,
            theme: req.theme,
            language: req.language,
            layout: req.layout,
            bookmarks_per_page: req.bookmarks_per_page,
            custom_css: req.custom_css,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateWallpaperRequest {
    pub wallpaper: String,
}
