#![allow(dead_code)]

//! Shared fixtures for identity-server endpoint tests.

use identity_server::{AppState, build_router};

use mb_auth::{JwtCodec, PasswordHasher};

use std::sync::Arc;

use axum::{Router, body::Body};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-at-least-32-bytes-long!!";

/// Router backed by a fresh in-memory database, plus the pool for tests
/// that manipulate rows behind the API's back.
///
/// One connection only: each sqlite `:memory:` connection is its own
/// database. Argon2 parameters are the cheapest valid ones so hashing
/// does not dominate the test run.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    mb_db::run_identity_migrations(&pool)
        .await
        .expect("Failed to run identity migrations");

    let app = build_router(AppState {
        pool: pool.clone(),
        codec: Arc::new(JwtCodec::new(TEST_SECRET, 3600)),
        hasher: Arc::new(PasswordHasher::new(1024, 1, 1)),
    });

    (app, pool)
}

/// POST a JSON body, returning status and parsed response body.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    send(app, request).await
}

/// GET with an optional bearer token, returning status and parsed body.
pub async fn get_json(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = builder
        .body(Body::empty())
        .expect("Failed to build request");

    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request to router failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };

    (status, body)
}

/// Register a user and return the minted token.
pub async fn register_user(app: &Router, name: &str, email: &str, password: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({ "name": name, "email": email, "password": password }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);

    body["token"]
        .as_str()
        .expect("Registration response missing token")
        .to_string()
}
