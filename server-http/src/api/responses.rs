use chrono::{DateTime, Utc};
use serde::Serialize;
use shelfmark::auth::{Role, Session, UserSnapshot};
use shelfmark::bookmarks::{Bookmark, BookmarkPage};
use shelfmark::settings::{Layout, Theme, UserSettings};

/// Response body for successful login or registration
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub role: Role,
    /// Session expiration time in seconds from now
    pub expires_in: u64,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user.user_id.clone(),
            username: session.user.username.clone(),
            display_name: session.user.display_name.clone(),
            role: session.user.role,
            expires_in: session.remaining_ttl_ms() / 1000,
        }
    }
}

/// The ambient identity of the calling session
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub role: Role,
}

impl From<UserSnapshot> for CurrentUserResponse {
    fn from(user: UserSnapshot) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            display_name: user.display_name,
            role: user.role,
        }
    }
}

/// Response body for logout
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    /// Success message
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub database: &'static str,
}

// === Bookmark models ===

#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            name: bookmark.name,
            url: bookmark.url,
            icon: bookmark.icon,
            category: bookmark.category,
            description: bookmark.description,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookmarksResponse {
    pub bookmarks: Vec<BookmarkResponse>,
}

#[derive(Debug, Serialize)]
pub struct BookmarkActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<BookmarkResponse>,
}

#[derive(Debug, Serialize)]
pub struct BookmarkListResponse {
    pub bookmarks: Vec<BookmarkResponse>,
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl From<BookmarkPage> for BookmarkListResponse {
    fn from(page: BookmarkPage) -> Self {
        Self {
            bookmarks: page.bookmarks.into_iter().map(Into::into).collect(),
            total: page.total,
            total_pages: page.total_pages,
            current_page: page.current_page,
        }
    }
}

// === Settings models ===

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub user_id: String,
    pub wallpaper: String,
    pub theme: Theme,
    pub language: String,
    pub layout: Layout,
    pub bookmarks_per_page: u32,
    pub custom_css: String,
    pub updated_at: DateTime<Utc>,
}

impl From<UserSettings> for SettingsResponse {
    fn from(settings: UserSettings) -> Self {
        Self {
            user_id: settings.user_id,
            wallpaper: settings.wallpaper,
            theme: settings.theme,
            language: settings.language,
            layout: settings.layout,
            bookmarks_per_page: settings.bookmarks_per_page,
            custom_css: settings.custom_css,
            updated_at: settings.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WallpaperResponse {
    pub success: bool,
    pub wallpaper: String,
}

/// Everything the main view needs in one round-trip
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: CurrentUserResponse,
    pub bookmarks: Vec<BookmarkResponse>,
    pub settings: SettingsResponse,
}

// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
