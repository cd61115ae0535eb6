use crate::{AuthError, IdentityVerifier, JwtCodec, Result as AuthErrorResult};

use mb_core::{CredentialStore, Identity};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Locally-authoritative verification: cryptographic check plus a fresh
/// store lookup.
///
/// Re-fetching the subject on every request means a deleted account is
/// rejected immediately without any revocation list.
pub struct LocalVerifier<S> {
    codec: Arc<JwtCodec>,
    store: S,
}

impl<S> LocalVerifier<S> {
    pub fn new(codec: Arc<JwtCodec>, store: S) -> Self {
        Self { codec, store }
    }
}

#[async_trait]
impl<S: CredentialStore> IdentityVerifier for LocalVerifier<S> {
    async fn verify(&self, token: &str) -> AuthErrorResult<Identity> {
        let claims = self.codec.decode(token)?;

        let user = self
            .store
            .find_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UnknownSubject {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Identity {
            id: user.id,
            email: user.email,
        })
    }
}
