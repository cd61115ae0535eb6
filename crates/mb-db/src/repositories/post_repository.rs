//! Post repository - content persistence for the posts service.

use crate::{DbError, Result as DbErrorResult};

use mb_core::{ErrorLocation, Post};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, title: &str, content: &str, author_id: i64) -> DbErrorResult<Post> {
        // Stored at whole-second precision; the returned entity matches
        // what a later read will see.
        let created_at_ts = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO posts (title, content, author_id, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(author_id)
        .bind(created_at_ts)
        .execute(&self.pool)
        .await?;

        Ok(Post {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            content: content.to_string(),
            author_id,
            created_at: stored_timestamp(created_at_ts)?,
        })
    }

    pub async fn find_by_author(&self, author_id: i64) -> DbErrorResult<Vec<Post>> {
        let rows = sqlx::query(
            r#"
                SELECT id, title, content, author_id, created_at
                FROM posts
                WHERE author_id = ?
                ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_post).collect()
    }
}

fn row_to_post(row: SqliteRow) -> DbErrorResult<Post> {
    let created_at_ts: i64 = row.try_get("created_at")?;

    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        author_id: row.try_get("author_id")?,
        created_at: stored_timestamp(created_at_ts)?,
    })
}

#[track_caller]
fn stored_timestamp(ts: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
        message: "Invalid timestamp in posts.created_at".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
