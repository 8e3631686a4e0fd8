use super::error::AuthError;
use super::models::User;
use super::repository::UserRepository;
use async_trait::async_trait;
use chrono::Utc;
use sled::Db;
use std::path::Path;

const USERS_TREE: &str = "users";
const USERS_BY_USERNAME_TREE: &str = "users_by_username";

#[derive(Clone)]
pub struct SledUserRepository {
    db: Db,
}

impl SledUserRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, AuthError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    fn users_tree(&self) -> Result<sled::Tree, AuthError> {
        Ok(self.db.open_tree(USERS_TREE)?)
    }

    fn users_by_username_tree(&self) -> Result<sled::Tree, AuthError> {
        Ok(self.db.open_tree(USERS_BY_USERNAME_TREE)?)
    }
}

#[async_trait]
impl UserRepository for SledUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        let users_tree = self.users_tree()?;
        let username_tree = self.users_by_username_tree()?;

        // Claim the username atomically; losing the swap means the name
        // is taken, however the race interleaved.
        let claimed = username_tree.compare_and_swap(
            user.username.as_bytes(),
            None as Option<&[u8]>,
            Some(user.id.as_bytes()),
        )?;
        if claimed.is_err() {
            return Err(AuthError::DuplicateUsername);
        }

        let user_json = serde_json::to_vec(&user)?;
        users_tree.insert(user.id.as_bytes(), user_json)?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
        let username_tree = self.users_by_username_tree()?;
        let users_tree = self.users_tree()?;

        // First, get the user ID from username index
        if let Some(user_id) = username_tree.get(username.as_bytes())? {
            // Then get the user by ID
            if let Some(user_data) = users_tree.get(&user_id)? {
                let user: User = serde_json::from_slice(&user_data)?;
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AuthError> {
        let users_tree = self.users_tree()?;

        if let Some(user_data) = users_tree.get(id.as_bytes())? {
            let user: User = serde_json::from_slice(&user_data)?;
            return Ok(Some(user));
        }

        Ok(None)
    }

    async fn username_exists(&self, username: &str) -> Result<bool, AuthError> {
        let username_tree = self.users_by_username_tree()?;
        Ok(username_tree.contains_key(username.as_bytes())?)
    }

    async fn record_login(&self, user_id: &str) -> Result<(), AuthError> {
        let users_tree = self.users_tree()?;

        let Some(user_data) = users_tree.get(user_id.as_bytes())? else {
            return Err(AuthError::Storage(format!(
                "user record missing: {user_id}"
            )));
        };

        // Only the login bookkeeping changes; the stored hash is carried
        // through untouched.
        let mut user: User = serde_json::from_slice(&user_data)?;
        user.last_login = Some(Utc::now());
        user.login_count += 1;

        users_tree.insert(user_id.as_bytes(), serde_json::to_vec(&user)?)?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), AuthError> {
        self.users_tree()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Role;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_and_find() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SledUserRepository::new(temp_dir.path().join("users.sled")).unwrap();

        let user = User::new("alice".to_string(), "hash123".to_string(), Role::User);

        // Create
        let created = repo.create(user.clone()).await.unwrap();
        assert_eq!(created.username, "alice");

        // Find by username
        let found = repo.find_by_username("alice").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().username, "alice");

        // Find by ID
        let found_by_id = repo.find_by_id(&created.id).await.unwrap();
        assert!(found_by_id.is_some());

        // Unknown username
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SledUserRepository::new(temp_dir.path().join("users.sled")).unwrap();

        let user = User::new("alice".to_string(), "hash1".to_string(), Role::User);
        repo.create(user).await.unwrap();

        let duplicate = User::new("alice".to_string(), "hash2".to_string(), Role::User);
        let result = repo.create(duplicate).await;
        assert!(matches!(result, Err(AuthError::DuplicateUsername)));

        // The original record is untouched
        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.password_hash, "hash1");
    }

    #[tokio::test]
    async fn test_record_login_bumps_counter_and_keeps_hash() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SledUserRepository::new(temp_dir.path().join("users.sled")).unwrap();

        let user = User::new("alice".to_string(), "hash123".to_string(), Role::User);
        let created = repo.create(user).await.unwrap();
        assert_eq!(created.login_count, 0);

        repo.record_login(&created.id).await.unwrap();
        repo.record_login(&created.id).await.unwrap();

        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.login_count, 2);
        assert!(found.last_login.is_some());
        assert_eq!(found.password_hash, "hash123");
    }

    #[tokio::test]
    async fn test_username_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SledUserRepository::new(temp_dir.path().join("users.sled")).unwrap();

        assert!(!repo.username_exists("alice").await.unwrap());
        let user = User::new("alice".to_string(), "hash".to_string(), Role::User);
        repo.create(user).await.unwrap();
        assert!(repo.username_exists("alice").await.unwrap());
    }
}
