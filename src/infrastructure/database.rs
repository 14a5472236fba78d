use crate::application::configuration::database::DatabaseConfiguration;
use sqlx::migrate::MigrateError;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Error, MySql, Pool, Sqlite};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DatabaseEngine {
    #[default]
    Sqlite,
    Mysql,
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseEngine::Sqlite => write!(f, "sqlite"),
            DatabaseEngine::Mysql => write!(f, "mysql"),
        }
    }
}

impl TryFrom<String> for DatabaseEngine {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "sqlite" => Ok(DatabaseEngine::Sqlite),
            "mysql" => Ok(DatabaseEngine::Mysql),
            _ => Err(format!("Unrecognized database engine: {}", value)),
        }
    }
}

impl DatabaseEngine {
    pub fn from_url(url: &str) -> Result<Self, String> {
        match url.to_lowercase() {
            scheme if scheme.starts_with("sqlite:") => Ok(DatabaseEngine::Sqlite),
            scheme if scheme.starts_with("mysql:") => Ok(DatabaseEngine::Mysql),
            _ => Err(format!("Unrecognized database url scheme: {}", url)),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DatabasePool {
    MySql(Pool<MySql>),
    Sqlite(Pool<Sqlite>),
}

impl DatabasePool {
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        match self {
            DatabasePool::MySql(pool) => sqlx::migrate!("./migrations/mysql").run(pool).await,
            DatabasePool::Sqlite(pool) => sqlx::migrate!("./migrations/sqlite").run(pool).await,
        }
    }

    pub async fn close(&self) {
        match self {
            DatabasePool::MySql(pool) => pool.close().await,
            DatabasePool::Sqlite(pool) => pool.close().await,
        }
    }
}

pub async fn create_pool(config: &DatabaseConfiguration) -> Result<DatabasePool, Error> {
    let timeout = Duration::from_millis(config.database_timeout_ms());

    match config.database_engine() {
        DatabaseEngine::Mysql => {
            let pool = MySqlPoolOptions::new()
                .max_connections(config.database_max_connections())
                .acquire_timeout(timeout)
                .connect(config.database_url())
                .await?;

            Ok(DatabasePool::MySql(pool))
        }
        DatabaseEngine::Sqlite => {
            let options =
                SqliteConnectOptions::from_str(config.database_url())?.create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(config.database_max_connections())
                .acquire_timeout(timeout)
                .connect_with(options)
                .await?;

            Ok(DatabasePool::Sqlite(pool))
        }
    }
}
