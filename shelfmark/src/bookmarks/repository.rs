use super::error::BookmarkError;
use super::models::Bookmark;
use async_trait::async_trait;

/// Every operation is scoped to an owner; a bookmark belonging to another
/// user behaves exactly like one that does not exist.
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Persist a new bookmark
    async fn create(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError>;

    /// Find a bookmark by ID, scoped to its owner
    async fn find(&self, user_id: &str, id: &str) -> Result<Option<Bookmark>, BookmarkError>;

    /// All bookmarks owned by a user
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Bookmark>, BookmarkError>;

    /// Replace a stored bookmark
    async fn update(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError>;

    /// Delete a bookmark, scoped to its owner; false if nothing was removed
    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, BookmarkError>;
}

/// Stand-in for when the bookmark store could not be opened.
pub struct UnavailableBookmarkRepository;

#[async_trait]
impl BookmarkRepository for UnavailableBookmarkRepository {
    async fn create(&self, _bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        Err(BookmarkError::StoreUnavailable)
    }

    async fn find(&self, _user_id: &str, _id: &str) -> Result<Option<Bookmark>, BookmarkError> {
        Err(BookmarkError::StoreUnavailable)
    }

    async fn list_by_user(&self, _user_id: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        Err(BookmarkError::StoreUnavailable)
    }

    async fn update(&self, _bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        Err(BookmarkError::StoreUnavailable)
    }

    async fn delete(&self, _user_id: &str, _id: &str) -> Result<bool, BookmarkError> {
        Err(BookmarkError::StoreUnavailable)
    }
}
