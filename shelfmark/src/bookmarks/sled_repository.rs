use super::error::BookmarkError;
use super::models::Bookmark;
use super::repository::BookmarkRepository;
use async_trait::async_trait;
use sled::Db;
use std::path::Path;

const BOOKMARKS_TREE: &str = "bookmarks";
const BOOKMARKS_BY_USER_TREE: &str = "bookmarks_by_user";

#[derive(Clone)]
pub struct SledBookmarkRepository {
    db: Db,
}

impl SledBookmarkRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, BookmarkError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    fn bookmarks_tree(&self) -> Result<sled::Tree, BookmarkError> {
        Ok(self.db.open_tree(BOOKMARKS_TREE)?)
    }

    fn by_user_tree(&self) -> Result<sled::Tree, BookmarkError> {
        Ok(self.db.open_tree(BOOKMARKS_BY_USER_TREE)?)
    }

    // Owner index key: "<user_id>/<bookmark_id>". User ids are UUIDs, so
    // the separator cannot collide with a key prefix.
    fn index_key(user_id: &str, id: &str) -> Vec<u8> {
        format!("{}/{}", user_id, id).into_bytes()
    }
}

#[async_trait]
impl BookmarkRepository for SledBookmarkRepository {
    async fn create(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        let bookmarks_tree = self.bookmarks_tree()?;
        let by_user_tree = self.by_user_tree()?;

        let json = serde_json::to_vec(&bookmark)?;

        // Store bookmark by ID
        bookmarks_tree.insert(bookmark.id.as_bytes(), json)?;

        // Store ID under the owner prefix for per-user scans
        by_user_tree.insert(
            Self::index_key(&bookmark.user_id, &bookmark.id),
            bookmark.id.as_bytes(),
        )?;

        Ok(bookmark)
    }

    async fn find(&self, user_id: &str, id: &str) -> Result<Option<Bookmark>, BookmarkError> {
        let bookmarks_tree = self.bookmarks_tree()?;

        if let Some(data) = bookmarks_tree.get(id.as_bytes())? {
            let bookmark: Bookmark = serde_json::from_slice(&data)?;
            if bookmark.user_id == user_id {
                return Ok(Some(bookmark));
            }
        }

        Ok(None)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        let bookmarks_tree = self.bookmarks_tree()?;
        let by_user_tree = self.by_user_tree()?;
        let mut bookmarks = Vec::new();

        for item in by_user_tree.scan_prefix(format!("{}/", user_id).as_bytes()) {
            let (_, id) = item?;
            if let Some(data) = bookmarks_tree.get(&id)? {
                let bookmark: Bookmark = serde_json::from_slice(&data)?;
                bookmarks.push(bookmark);
            }
        }

        Ok(bookmarks)
    }

    async fn update(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        let bookmarks_tree = self.bookmarks_tree()?;

        if !bookmarks_tree.contains_key(bookmark.id.as_bytes())? {
            return Err(BookmarkError::NotFound);
        }

        let json = serde_json::to_vec(&bookmark)?;
        bookmarks_tree.insert(bookmark.id.as_bytes(), json)?;

        Ok(bookmark)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, BookmarkError> {
        let bookmarks_tree = self.bookmarks_tree()?;
        let by_user_tree = self.by_user_tree()?;

        // Only the owner's delete touches the record
        match self.find(user_id, id).await? {
            Some(_) => {
                bookmarks_tree.remove(id.as_bytes())?;
                by_user_tree.remove(Self::index_key(user_id, id))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
