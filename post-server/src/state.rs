use mb_auth::DelegatedVerifier;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state for the posts service.
///
/// The verifier owns the HTTP client for identity delegation; sharing it
/// through `Arc` reuses that client's connection pool across requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub verifier: Arc<DelegatedVerifier>,
}
