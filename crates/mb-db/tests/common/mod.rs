#![allow(dead_code)]

//! Shared fixtures for repository tests.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Single-connection in-memory pool. One connection only: each sqlite
/// `:memory:` connection is its own database, so a wider pool would run
/// migrations and queries against different databases.
async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(":memory:")
        .await
        .expect("Failed to create test database")
}

/// In-memory pool with the identity service schema applied.
pub async fn identity_pool() -> SqlitePool {
    let pool = memory_pool().await;

    mb_db::run_identity_migrations(&pool)
        .await
        .expect("Failed to run identity migrations");

    pool
}

/// In-memory pool with the posts service schema applied.
pub async fn posts_pool() -> SqlitePool {
    let pool = memory_pool().await;

    mb_db::run_post_migrations(&pool)
        .await
        .expect("Failed to run posts migrations");

    pool
}
