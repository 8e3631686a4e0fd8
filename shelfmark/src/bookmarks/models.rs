use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_NAME: &str = "Untitled";
pub const DEFAULT_ICON: &str = "/images/default-icon.png";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(user_id: String, new: NewBookmark) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            name: new.name.filter(|n| !n.is_empty()).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            url: new.url,
            icon: new.icon.filter(|i| !i.is_empty()).unwrap_or_else(|| DEFAULT_ICON.to_string()),
            category: new
                .category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            description: new.description.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields accepted when creating a bookmark; everything but the URL has a default.
#[derive(Debug, Clone, Default)]
pub struct NewBookmark {
    pub name: Option<String>,
    pub url: String,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct BookmarkPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Pagination and search parameters for listing bookmarks
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
        }
    }
}

/// One page of a user's bookmarks, newest first
#[derive(Debug, Clone)]
pub struct BookmarkPage {
    pub bookmarks: Vec<Bookmark>,
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bookmark_applies_defaults() {
        let bookmark = Bookmark::new(
            "user-1".to_string(),
            NewBookmark {
                url: "https://example.com".to_string(),
                ..Default::default()
            },
        );

        assert_eq!(bookmark.name, DEFAULT_NAME);
        assert_eq!(bookmark.icon, DEFAULT_ICON);
        assert_eq!(bookmark.category, DEFAULT_CATEGORY);
        assert_eq!(bookmark.description, "");
        assert_eq!(bookmark.user_id, "user-1");
    }

    #[test]
    fn test_new_bookmark_keeps_provided_fields() {
        let bookmark = Bookmark::new(
            "user-1".to_string(),
            NewBookmark {
                name: Some("Docs".to_string()),
                url: "https://docs.rs".to_string(),
                icon: Some("/icons/docs.png".to_string()),
                category: Some("dev".to_string()),
                description: Some("crate docs".to_string()),
            },
        );

        assert_eq!(bookmark.name, "Docs");
        assert_eq!(bookmark.category, "dev");
        assert_eq!(bookmark.description, "crate docs");
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let bookmark = Bookmark::new(
            "user-1".to_string(),
            NewBookmark {
                name: Some(String::new()),
                url: "https://example.com".to_string(),
                icon: Some(String::new()),
                category: Some(String::new()),
                description: None,
            },
        );

        assert_eq!(bookmark.name, DEFAULT_NAME);
        assert_eq!(bookmark.icon, DEFAULT_ICON);
        assert_eq!(bookmark.category, DEFAULT_CATEGORY);
    }
}
