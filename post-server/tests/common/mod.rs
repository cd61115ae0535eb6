#![allow(dead_code)]

//! Shared fixtures for post-server endpoint tests.
//!
//! The identity peer is a wiremock server; each test states exactly how
//! the peer answers (or fails to answer) verification calls.

use post_server::{AppState, build_router};

use mb_auth::{Claims, DelegatedVerifier};

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, body::Body};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(250);

/// Router backed by a fresh in-memory database, verifying against the
/// identity peer at `identity_url`.
///
/// One connection only: each sqlite `:memory:` connection is its own
/// database.
pub async fn test_app(identity_url: &str, timeout: Duration) -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    mb_db::run_post_migrations(&pool)
        .await
        .expect("Failed to run posts migrations");

    let verifier =
        DelegatedVerifier::new(identity_url, timeout).expect("Failed to build verifier");

    let app = build_router(AppState {
        pool: pool.clone(),
        verifier: Arc::new(verifier),
    });

    (app, pool)
}

/// A structurally valid JWT for subject `id`.
///
/// The signing secret is irrelevant here: this service never checks the
/// signature, only the peer's answer decides.
pub fn some_token(id: i64, email: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: id,
        email: email.to_string(),
        iat: now,
        exp: now + 3600,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"not-the-identity-services-secret"),
    )
    .expect("Failed to encode test token")
}

/// POST a JSON body with an optional bearer token.
pub async fn post_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = builder
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    send(app, request).await
}

/// GET with an optional bearer token.
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
