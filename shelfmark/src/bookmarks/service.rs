use super::error::BookmarkError;
use super::models::{Bookmark, BookmarkPage, BookmarkPatch, ListQuery, NewBookmark};
use super::repository::BookmarkRepository;
use chrono::Utc;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 50;
const MAX_PAGE_SIZE: usize = 100;

pub struct BookmarkService {
    repo: Arc<dyn BookmarkRepository>,
}

impl BookmarkService {
    pub fn new(repo: Arc<dyn BookmarkRepository>) -> Self {
        Self { repo }
    }

    /// Create a bookmark for a user, applying defaults for omitted fields
    pub async fn create(
        &self,
        user_id: &str,
        new: NewBookmark,
    ) -> Result<Bookmark, BookmarkError> {
        validate_url(&new.url)?;
        validate_name(new.name.as_deref())?;

        self.repo.create(Bookmark::new(user_id.to_string(), new)).await
    }

    /// Fetch a single bookmark owned by the user
    pub async fn get(&self, user_id: &str, id: &str) -> Result<Bookmark, BookmarkError> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(BookmarkError::NotFound)
    }

    /// All of a user's bookmarks, newest first
    pub async fn list_all(&self, user_id: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        let mut bookmarks = self.repo.list_by_user(user_id).await?;
        bookmarks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookmarks)
    }

    /// One page of a user's bookmarks, optionally filtered by a
    /// case-insensitive substring match over name, url, and category.
    pub async fn list(
        &self,
        user_id: &str,
        query: ListQuery,
    ) -> Result<BookmarkPage, BookmarkError> {
        let mut bookmarks = self.repo.list_by_user(user_id).await?;

        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            bookmarks.retain(|b| {
                b.name.to_lowercase().contains(&needle)
                    || b.url.to_lowercase().contains(&needle)
                    || b.category.to_lowercase().contains(&needle)
            });
        }

        bookmarks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = bookmarks.len();
        let limit = query.limit.clamp(1, MAX_PAGE_SIZE);
        let total_pages = total.div_ceil(limit);
        let page = query.page.max(1);

        let bookmarks = bookmarks
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        Ok(BookmarkPage {
            bookmarks,
            total,
            total_pages,
            current_page: page,
        })
    }

    /// Apply a partial update to an owned bookmark
    pub async fn update(
        &self,
        user_id: &str,
        id: &str,
        patch: BookmarkPatch,
    ) -> Result<Bookmark, BookmarkError> {
        let mut bookmark = self.get(user_id, id).await?;

        if let Some(url) = patch.url {
            validate_url(&url)?;
            bookmark.url = url;
        }
        if let Some(name) = patch.name {
            validate_name(Some(&name))?;
            bookmark.name = name;
        }
        if let Some(icon) = patch.icon {
            bookmark.icon = icon;
        }
        if let Some(category) = patch.category {
            bookmark.category = category;
        }
        if let Some(description) = patch.description {
            bookmark.description = description;
        }
        bookmark.updated_at = Utc::now();

        self.repo.update(bookmark).await
    }

    /// Delete an owned bookmark
    pub async fn delete(&self, user_id: &str, id: &str) -> Result<(), BookmarkError> {
        if self.repo.delete(user_id, id).await? {
            Ok(())
        } else {
            Err(BookmarkError::NotFound)
        }
    }

    /// Delete a batch of owned bookmarks; returns how many were removed.
    /// Ids that do not exist or belong to someone else are skipped.
    pub async fn delete_many(
        &self,
        user_id: &str,
        ids: &[String],
    ) -> Result<usize, BookmarkError> {
        let mut deleted = 0;
        for id in ids {
            if self.repo.delete(user_id, id).await? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}

fn validate_url(url: &str) -> Result<(), BookmarkError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(BookmarkError::Validation(
            "url must start with http:// or https://".to_string(),
        ))
    }
}

fn validate_name(name: Option<&str>) -> Result<(), BookmarkError> {
    match name {
        Some(name) if name.chars().count() > MAX_NAME_LEN => Err(BookmarkError::Validation(
            format!("name must be at most {} characters", MAX_NAME_LEN),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::sled_repository::SledBookmarkRepository;
    use tempfile::TempDir;

    fn service(temp_dir: &TempDir) -> BookmarkService {
        let repo =
            SledBookmarkRepository::new(temp_dir.path().join("bookmarks.sled")).unwrap();
        BookmarkService::new(Arc::new(repo))
    }

    fn new_bookmark(name: &str, url: &str, category: &str) -> NewBookmark {
        NewBookmark {
            name: Some(name.to_string()),
            url: url.to_string(),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_rejects_bad_url() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let result = service
            .create(
                "user-1",
                NewBookmark {
                    url: "ftp://example.com".to_string(),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(BookmarkError::Validation(_))));

        let result = service
            .create(
                "user-1",
                NewBookmark {
                    url: "https://example.com".to_string(),
                    ..Default::default()
                },
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_long_name() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let result = service
            .create(
                "user-1",
                NewBookmark {
                    name: Some("x".repeat(51)),
                    url: "https://example.com".to_string(),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(BookmarkError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_search_and_pagination() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        for i in 0..12 {
            service
                .create(
                    "user-1",
                    new_bookmark(
                        &format!("site {i}"),
                        &format!("https://site{i}.example"),
                        if i % 2 == 0 { "even" } else { "odd" },
                    ),
                )
                .await
                .unwrap();
        }

        // Default paging: 10 per page
        let page = service.list("user-1", ListQuery::default()).await.unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.bookmarks.len(), 10);
        assert_eq!(page.current_page, 1);

        let page2 = service
            .list(
                "user-1",
                ListQuery {
                    page: 2,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page2.bookmarks.len(), 2);

        // Category search is case-insensitive
        let evens = service
            .list(
                "user-1",
                ListQuery {
                    search: Some("EVEN".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(evens.total, 6);

        // Search by url fragment
        let one = service
            .list(
                "user-1",
                ListQuery {
                    search: Some("site3.example".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(one.total, 1);
    }

    #[tokio::test]
    async fn test_update_is_ownership_scoped() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let created = service
            .create("user-1", new_bookmark("docs", "https://docs.rs", "dev"))
            .await
            .unwrap();

        // Someone else's update looks like a missing bookmark
        let result = service
            .update(
                "user-2",
                &created.id,
                BookmarkPatch {
                    name: Some("stolen".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(BookmarkError::NotFound)));

        let updated = service
            .update(
                "user-1",
                &created.id,
                BookmarkPatch {
                    name: Some("rust docs".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "rust docs");
        assert_eq!(updated.url, "https://docs.rs");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_delete_many_skips_foreign_ids() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let mine = service
            .create("user-1", new_bookmark("a", "https://a.example", "x"))
            .await
            .unwrap();
        let theirs = service
            .create("user-2", new_bookmark("b", "https://b.example", "x"))
            .await
            .unwrap();

        let deleted = service
            .delete_many(
                "user-1",
                &[mine.id.clone(), theirs.id.clone(), "missing".to_string()],
            )
            .await
            .unwrap();

        assert_eq!(deleted, 1);
        assert!(service.get("user-2", &theirs.id).await.is_ok());
    }
}
