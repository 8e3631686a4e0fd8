pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod sled_repository;

pub use error::BookmarkError;
pub use models::{Bookmark, BookmarkPage, BookmarkPatch, ListQuery, NewBookmark};
pub use repository::{BookmarkRepository, UnavailableBookmarkRepository};
pub use service::BookmarkService;
pub use sled_repository::SledBookmarkRepository;
