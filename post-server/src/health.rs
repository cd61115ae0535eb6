use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /health - Liveness check for the posts service
///
/// Deliberately does not probe the identity peer: this answers "is the
/// process alive", not "can requests be verified right now".
pub async fn health_check() -> Response {
    let health = json!({
        "status": "healthy",
        "service": "post-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
