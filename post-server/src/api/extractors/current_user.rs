//! Axum extractor for delegated-verified requests

use crate::state::AppState;

use mb_api::ApiError;
use mb_auth::{IdentityVerifier, bearer_token};
use mb_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The verified caller of a protected request.
///
/// This service holds no signing secret and no user rows; the token is
/// forwarded to the identity service and its answer is taken as ground
/// truth. Peer failure and bad token collapse into the same 401.
pub struct CurrentUser(pub Identity);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(&parts.headers)?;
            let identity = state.verifier.verify(token).await?;

            Ok(CurrentUser(identity))
        }
    }
}
