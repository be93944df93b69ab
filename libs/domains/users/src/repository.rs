use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in id order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// First user (lowest id) with exactly this email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Insert a user and return the store-assigned id
    async fn create(&self, user: NewUser) -> UserResult<i64>;

    /// Overwrite every field of a user. Returns false when no row has `id`.
    async fn update(&self, id: i64, user: NewUser) -> UserResult<bool>;

    /// Delete a user by ID. Returns false when no row has `id`.
    async fn delete(&self, id: i64) -> UserResult<bool>;

    /// Users whose name contains `name`, ASCII case-insensitive, in id order
    async fn search_by_name(&self, name: &str) -> UserResult<Vec<User>>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids are assigned like SQLite `AUTOINCREMENT`: increasing and never reused.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> UserResult<i64> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let id = store.last_id;
        store.users.insert(
            id,
            User {
                id,
                name: user.name,
                email: user.email,
                password_hash: user.password_hash,
            },
        );

        tracing::info!(user_id = id, "Created user");
        Ok(id)
    }

    async fn update(&self, id: i64, user: NewUser) -> UserResult<bool> {
        let mut store = self.store.write().await;

        let Some(existing) = store.users.get_mut(&id) else {
            return Ok(false);
        };
        existing.name = user.name;
        existing.email = user.email;
        existing.password_hash = user.password_hash;

        tracing::info!(user_id = id, "Updated user");
        Ok(true)
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut store = self.store.write().await;
        Ok(store.users.remove(&id).is_some())
    }

    async fn search_by_name(&self, name: &str) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        let needle = name.to_ascii_lowercase();

        Ok(store
            .users
            .values()
            .filter(|u| u.name.to_ascii_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
