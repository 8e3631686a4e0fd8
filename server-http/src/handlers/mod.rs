pub mod auth;
pub mod bookmarks;
pub mod health;
pub mod settings;

pub use auth::{login, login_entry, logout, me, register};
pub use bookmarks::{
    create_bookmark, dashboard, delete_bookmark, delete_bookmarks, get_bookmark, list_bookmarks,
    search_bookmarks, update_bookmark,
};
pub use health::health_check;
pub use settings::{get_settings, update_settings, update_wallpaper};
