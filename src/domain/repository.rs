use crate::domain::user::{NewUser, User, UserChanges};
use async_trait::async_trait;
use sqlx::Error as SqlxError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RepositoryError {
    NotFound(String),
    Database(SqlxError),
    Unavailable(String),
}

impl RepositoryError {
    pub fn user_not_found(id: i64) -> Self {
        RepositoryError::NotFound(format!("User with id {} does not exist.", id))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RepositoryError::NotFound(_) => "NotFound",
            RepositoryError::Database(_) => "DatabaseError",
            RepositoryError::Unavailable(_) => "StorageUnavailable",
        }
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(msg) => write!(f, "{}", msg),
            RepositoryError::Database(e) => write!(f, "{}", e),
            RepositoryError::Unavailable(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for RepositoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RepositoryError::Database(e) => Some(e),
            _ => None,
        }
    }
}

/// Storage contract for users.
///
/// Absence of a row is reported as [`RepositoryError::NotFound`]; every other
/// error variant is a storage fault. Each mutation is applied atomically.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
    async fn select_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn select_by_id(&self, id: i64) -> Result<User, RepositoryError>;
    async fn update(&self, id: i64, changes: &UserChanges) -> Result<User, RepositoryError>;
    async fn delete_by_id(&self, id: i64) -> Result<User, RepositoryError>;
}
