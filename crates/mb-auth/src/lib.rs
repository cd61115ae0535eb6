pub mod bearer;
pub mod claims;
pub mod codec;
pub mod credential_service;
pub mod delegated_verifier;
pub mod error;
pub mod local_verifier;
pub mod password;
pub mod verifier;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use codec::JwtCodec;
pub use credential_service::{CredentialService, LoginRequest, RegisterRequest, Registration};
pub use delegated_verifier::DelegatedVerifier;
pub use error::{AuthError, Result};
pub use local_verifier::LocalVerifier;
pub use password::PasswordHasher;
pub use verifier::IdentityVerifier;

#[cfg(test)]
mod tests;
