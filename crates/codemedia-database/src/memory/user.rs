//! In-memory user store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use codemedia_core::error::AppError;
use codemedia_core::result::AppResult;
use codemedia_core::types::UserId;
use codemedia_entity::user::{CreateUser, User};

use crate::store::UserStore;

/// User store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.username == data.username || u.email == data.email)
        {
            return Err(AppError::conflict("Username or email already in use"));
        }

        let user = User {
            id: UserId::new(),
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut out: Vec<User> = self.users.read().await.values().cloned().collect();
        out.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(out)
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        Ok(self.users.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use codemedia_core::error::ErrorKind;
    use codemedia_entity::user::UserRole;

    use super::*;

    fn new_user(username: &str, email: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Professor,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryUserStore::new();
        store.create(&new_user("ada", "ada@example.com")).await.expect("create");

        let err = store
            .create(&new_user("ada2", "ada@example.com"))
            .await
            .expect_err("duplicate");
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_unknown() {
        let store = MemoryUserStore::new();
        let ada = store.create(&new_user("ada", "ada@example.com")).await.expect("create");

        let found = store.find_by_ids(&[ada.id, UserId::new()]).await.expect("find");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "ada");
    }
}
