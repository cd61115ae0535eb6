use crate::{AuthError, IdentityVerifier, Result as AuthErrorResult};

use mb_core::Identity;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;

/// Body of the identity service's who-am-I endpoint.
#[derive(Debug, Deserialize)]
struct MeEnvelope {
    user: MeUser,
}

#[derive(Debug, Deserialize)]
struct MeUser {
    id: i64,
    email: String,
}

/// Delegated verification for a service with no credential store access.
///
/// Trust is established by forwarding the bearer token to the identity
/// service's `/api/v1/auth/me` endpoint and taking its answer as ground
/// truth. The only local check is a structural decode of the JWT header,
/// which rejects obvious garbage without a network round-trip but makes
/// no trust decision - this service never holds the signing secret.
///
/// The trade: one synchronous outbound call per protected request, and a
/// hard availability dependency on the identity service. The request
/// timeout bounds how long a stalled peer can block a caller; a timeout
/// is a denial, never an allow.
pub struct DelegatedVerifier {
    client: ReqwestClient,
    identity_url: String,
}

impl DelegatedVerifier {
    /// Create a verifier targeting the identity service at `identity_url`.
    ///
    /// `timeout` applies to the whole outbound call, connect included.
    #[track_caller]
    pub fn new(identity_url: &str, timeout: Duration) -> AuthErrorResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Delegation {
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client,
            identity_url: identity_url.trim_end_matches('/').to_string(),
        })
    }

    #[track_caller]
    fn deny(message: impl Into<String>) -> AuthError {
        AuthError::Delegation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl IdentityVerifier for DelegatedVerifier {
    async fn verify(&self, token: &str) -> AuthErrorResult<Identity> {
        // Cheap structural rejection; not a trust decision.
        jsonwebtoken::decode_header(token)
            .map_err(|e| Self::deny(format!("Malformed token: {}", e)))?;

        let url = format!("{}/api/v1/auth/me", self.identity_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                log::debug!("Identity service call failed: {}", e);
                Self::deny("Identity service unreachable")
            })?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Identity service rejected token: {}", status);
            return Err(Self::deny(format!(
                "Identity service returned {}",
                status.as_u16()
            )));
        }

        let body: MeEnvelope = response.json().await.map_err(|e| {
            log::debug!("Identity service body unreadable: {}", e);
            Self::deny("Malformed identity response")
        })?;

        Ok(Identity {
            id: body.user.id,
            email: body.user.email,
        })
    }
}
