use crate::Result as AuthErrorResult;

use mb_core::Identity;

use async_trait::async_trait;

/// One verification contract, two deployment-selected implementations.
///
/// [`crate::LocalVerifier`] is used inside the identity service: it checks
/// the signature itself and re-confirms the subject against the credential
/// store. [`crate::DelegatedVerifier`] is used by a peer service with no
/// store access: it asks the identity service to vouch for the token.
/// Both present the same success/failure surface, so the shared contract
/// tests run against either.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Establish trust in a bearer token, returning the verified identity.
    ///
    /// Every failure mode (expired, tampered, unknown subject, peer
    /// unreachable) is an error; ambiguity is always deny.
    async fn verify(&self, token: &str) -> AuthErrorResult<Identity>;
}
