// ABOUTME: User storage layer using SQLite
// ABOUTME: Registers accounts, looks them up by email, and records logins

use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use prdkit_storage::{StorageError, StorageResult};

use super::types::{NewUser, User};
use crate::password::StoredPassword;

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account. A second account with the same email fails with
    /// `StorageError::Duplicate`.
    pub async fn create_user(&self, input: NewUser) -> StorageResult<User> {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            password: input.password,
            created_at: Utc::now(),
            last_login_at: None,
        };

        debug!("Creating user: {}", user.id);

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, password_salt, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password.hash)
        .bind(&user.password.salt)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        debug!("Looking up user by email");

        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    pub async fn get_user(&self, user_id: &str) -> StorageResult<User> {
        debug!("Fetching user: {}", user_id);

        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::NotFound(format!("user {}", user_id)))?;

        Self::row_to_user(&row)
    }

    pub async fn touch_last_login(&self, user_id: &str, at: DateTime<Utc>) -> StorageResult<()> {
        debug!("Recording login for user: {}", user_id);

        let result = sqlx::query("UPDATE users SET last_login_at = ? WHERE id = ?")
            .bind(at)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("user {}", user_id)));
        }

        Ok(())
    }

    fn row_to_user(row: &SqliteRow) -> StorageResult<User> {
        Ok(User {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password: StoredPassword {
                hash: row.try_get("password_hash")?,
                salt: row.try_get("password_salt")?,
            },
            created_at: row.try_get("created_at")?,
            last_login_at: row.try_get("last_login_at")?,
        })
    }
}
