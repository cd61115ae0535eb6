//! Pool construction and embedded migrations.
//!
//! Each service owns its own database file and schema: the identity
//! service gets the users table, the posts service gets the posts table.
//! Neither service ever opens the other's file.

use crate::{DbError, Result};

use mb_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open (creating if missing) a SQLite pool at `path`.
pub async fn connect(path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to create database directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    log::debug!("Opened sqlite pool at {}", path.display());

    Ok(pool)
}

/// Apply the identity service schema (users).
pub async fn run_identity_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations/identity")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Identity migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Apply the posts service schema (posts).
pub async fn run_post_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations/posts")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Posts migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}
