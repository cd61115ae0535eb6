use mb_auth::{JwtCodec, PasswordHasher};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state for the identity service.
///
/// The codec and hasher are process-wide and immutable after startup, so
/// handlers share them through `Arc` instead of rebuilding per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub codec: Arc<JwtCodec>,
    pub hasher: Arc<PasswordHasher>,
}
