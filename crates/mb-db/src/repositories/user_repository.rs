//! User repository - the durable credential store of the identity service.

use crate::{DbError, Result as DbErrorResult};

use mb_core::{CredentialStore, ErrorLocation, NewUser, Result as StoreResult, StoreError, User};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. The UNIQUE constraint on email is the authority on
    /// duplicates; a violation surfaces as a unique-violation `DbError`.
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        // Stored at whole-second precision; the returned entity matches
        // what a later read will see.
        let created_at_ts = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (name, email, password_hash, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(created_at_ts)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            created_at: stored_timestamp(created_at_ts)?,
        })
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, password_hash, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_user).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, password_hash, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_user).transpose()
    }
}

fn row_to_user(row: SqliteRow) -> DbErrorResult<User> {
    let created_at_ts: i64 = row.try_get("created_at")?;

    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: stored_timestamp(created_at_ts)?,
    })
}

#[track_caller]
fn stored_timestamp(ts: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
        message: "Invalid timestamp in users.created_at".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        UserRepository::find_by_email(self, email)
            .await
            .map_err(StoreError::from)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        UserRepository::find_by_id(self, id)
            .await
            .map_err(StoreError::from)
    }

    async fn create(&self, user: NewUser) -> StoreResult<User> {
        UserRepository::create(self, &user)
            .await
            .map_err(StoreError::from)
    }
}
