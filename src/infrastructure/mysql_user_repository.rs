use crate::domain::repository::{RepositoryError, UserRepository};
use crate::domain::user::{NewUser, User, UserChanges};
use crate::infrastructure::dto::UserRow;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySql, Pool};

const SELECT_BY_ID: &str = r#"
    SELECT id, first_name, last_name, email, created_at, updated_at
    FROM users
    WHERE id = ?
"#;

const SELECT_BY_ID_FOR_UPDATE: &str = r#"
    SELECT id, first_name, last_name, email, created_at, updated_at
    FROM users
    WHERE id = ?
    FOR UPDATE
"#;

#[derive(Clone)]
pub struct MysqlUserRepository {
    pool: Pool<MySql>,
}

impl MysqlUserRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MysqlUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, email, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, UserRow>(SELECT_BY_ID)
            .bind(result.last_insert_id() as i64)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn select_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn select_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(row.into()),
            None => Err(RepositoryError::user_not_found(id)),
        }
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, UserRow>(SELECT_BY_ID_FOR_UPDATE)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let existing = match existing {
            Some(row) => row,
            None => return Err(RepositoryError::user_not_found(id)),
        };

        if changes.is_empty() {
            tx.commit().await?;

            return Ok(existing.into());
        }

        sqlx::query(
            r#"
            UPDATE users
            SET first_name = COALESCE(?, first_name),
                last_name = COALESCE(?, last_name),
                email = COALESCE(?, email),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(&changes.email)
        .bind(Utc::now())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, UserRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, UserRow>(SELECT_BY_ID_FOR_UPDATE)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let existing = match existing {
            Some(row) => row,
            None => return Err(RepositoryError::user_not_found(id)),
        };

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(existing.into())
    }
}
