use shelfmark::auth::{AuthService, MokaSessionRepository};
use shelfmark::bookmarks::BookmarkService;
use shelfmark::settings::SettingsService;
use std::sync::Arc;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<MokaSessionRepository>>,
    pub bookmarks: Arc<BookmarkService>,
    pub settings: Arc<SettingsService>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService<MokaSessionRepository>>,
        bookmarks: Arc<BookmarkService>,
        settings: Arc<SettingsService>,
    ) -> Self {
        Self {
            auth_service,
            bookmarks,
            settings,
        }
    }
}

