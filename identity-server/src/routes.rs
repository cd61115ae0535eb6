use crate::{api, health, state::AppState};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authentication endpoints
        .route("/api/v1/auth/login", post(api::auth::auth::login))
        .route("/api/v1/auth/register", post(api::auth::auth::register))
        .route("/api/v1/auth/me", get(api::auth::auth::me))
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
