use crate::domain::repository::{RepositoryError, UserRepository};
use crate::domain::user::{NewUser, User, UserChanges};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Storage {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

/// Process-local repository. Ids start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    storage: Arc<RwLock<Storage>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        InMemoryUserRepository::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut storage = self.storage.write().await;
        storage.last_id += 1;

        let user = User {
            id: storage.last_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        storage.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn select_all(&self) -> Result<Vec<User>, RepositoryError> {
        let storage = self.storage.read().await;

        Ok(storage.users.values().cloned().collect())
    }

    async fn select_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let storage = self.storage.read().await;

        storage
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::user_not_found(id))
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> Result<User, RepositoryError> {
        let mut storage = self.storage.write().await;

        let user = match storage.users.get_mut(&id) {
            Some(user) => user,
            None => return Err(RepositoryError::user_not_found(id)),
        };

        if changes.apply_to(user) {
            user.updated_at = Some(Utc::now());
        }

        Ok(user.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let mut storage = self.storage.write().await;

        storage
            .users
            .remove(&id)
            .ok_or_else(|| RepositoryError::user_not_found(id))
    }
}
