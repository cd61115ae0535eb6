//! Axum extractor for locally-verified requests

use crate::state::AppState;

use mb_api::ApiError;
use mb_auth::{IdentityVerifier, LocalVerifier, bearer_token};
use mb_core::Identity;
use mb_db::UserRepository;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The verified caller of a protected request.
///
/// Verification is local: decode the bearer token with the process
/// secret, then re-fetch the subject from the credential store. Any
/// failure surfaces as one indistinguishable 401.
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

            let verifier = LocalVerifier::new(
                state.codec.clone(),
                UserRepository::new(state.pool.clone()),
            );
            let identity = verifier.verify(token).await?;

            Ok(CurrentUser(identity))
        }
    }
}
