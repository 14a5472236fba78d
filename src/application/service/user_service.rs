use crate::domain::error::ServiceError;
use crate::domain::repository::{RepositoryError, UserRepository};
use crate::domain::user::{NewUser, User, UserChanges};
use async_trait::async_trait;
use std::sync::Arc;

/// User operations as seen by the HTTP and CLI boundaries.
///
/// Every call yields either the entity or a [`ServiceError`], never a raw
/// storage fault.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, ServiceError>;
    async fn get_all_users(&self) -> Result<Vec<User>, ServiceError>;
    async fn get_user(&self, id: i64) -> Result<User, ServiceError>;
    async fn update_user(&self, id: i64, changes: UserChanges) -> Result<User, ServiceError>;
    async fn delete_user(&self, id: i64) -> Result<User, ServiceError>;
}

#[derive(Clone)]
pub struct UserManager {
    user_repository: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, user: NewUser) -> Result<User, ServiceError> {
        let user = collapse("create_user", self.user_repository.create(&user).await)?;
        tracing::debug!("User created: {}({})", &user.email, &user.id);

        Ok(user)
    }

    async fn get_all_users(&self) -> Result<Vec<User>, ServiceError> {
        collapse("get_all_users", self.user_repository.select_all().await)
    }

    async fn get_user(&self, id: i64) -> Result<User, ServiceError> {
        collapse("get_user", self.user_repository.select_by_id(id).await)
    }

    async fn update_user(&self, id: i64, changes: UserChanges) -> Result<User, ServiceError> {
        let user = collapse("update_user", self.user_repository.update(id, &changes).await)?;
        tracing::debug!("User updated: {}({})", &user.email, &user.id);

        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> Result<User, ServiceError> {
        let user = collapse("delete_user", self.user_repository.delete_by_id(id).await)?;
        tracing::debug!("User deleted: {}({})", &user.email, &user.id);

        Ok(user)
    }
}

/// Reduces a repository outcome to the entity or an error pair.
///
/// An empty collection is a successful result. Faults are logged here, where
/// they are captured, and reported as `UnexpectedError`.
pub fn collapse<T>(
    operation: &str,
    result: Result<T, RepositoryError>,
) -> Result<T, ServiceError> {
    match result {
        Ok(entity) => Ok(entity),
        Err(RepositoryError::NotFound(message)) => {
            tracing::debug!(operation, "{}", message);

            Err(ServiceError::user_does_not_exist(message))
        }
        Err(error) => {
            tracing::error!(
                operation,
                kind = error.kind(),
                "Unexpected error in {}: {}",
                operation,
                error
            );

            Err(ServiceError::unexpected(error.kind(), &error))
        }
    }
}

pub fn create_user_service(user_repository: Arc<dyn UserRepository>) -> Arc<dyn UserService> {
    Arc::new(UserManager::new(user_repository))
}
