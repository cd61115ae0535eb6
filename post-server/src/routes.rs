use crate::{api, health, state::AppState};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Post endpoints (all require delegated verification)
        .route("/api/v1/posts", post(api::posts::posts::create_post))
        .route("/api/v1/posts/me", get(api::posts::posts::my_posts))
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
