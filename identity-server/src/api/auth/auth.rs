//! Authentication REST API handlers
//!
//! Login and registration mint tokens; `me` is the verification endpoint
//! that other services delegate to.

use crate::{CurrentUser, LoginResponse, MeResponse, RegisterResponse, UserDto, state::AppState};

use mb_api::{ApiError, Result as ApiResult};
use mb_auth::{CredentialService, LoginRequest, RegisterRequest};
use mb_db::UserRepository;

use axum::{Json, extract::State, http::StatusCode};

fn credential_service(state: &AppState) -> CredentialService<UserRepository> {
    CredentialService::new(
        UserRepository::new(state.pool.clone()),
        state.codec.clone(),
        state.hasher.clone(),
    )
}

/// POST /api/v1/auth/login
///
/// Validate credentials and mint a token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = credential_service(&state).login(&request).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// POST /api/v1/auth/register
///
/// Create an account and mint its first token
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let registration = credential_service(&state).register(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            token: registration.token,
            user: UserDto::from(registration.user),
        }),
    ))
}

/// GET /api/v1/auth/me
///
/// Return the verified caller's account. The extractor has already
/// re-fetched the subject; this handler reads the row once more so the
/// response reflects the store at response time, not at verification time.
pub async fn me(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> ApiResult<Json<MeResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(identity.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(MeResponse {
        user: UserDto::from(user),
    }))
}
