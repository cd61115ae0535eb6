use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core::OsRng,
    },
};
use error_location::ErrorLocation;

/// Salted, slow password hashing (Argon2id).
///
/// Cost parameters come from configuration rather than literals so
/// deployments can tune them against offline brute force.
pub struct PasswordHasher {
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
}

impl PasswordHasher {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }

    #[track_caller]
    fn argon2(&self) -> AuthErrorResult<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| AuthError::Hash {
                message: format!("Invalid argon2 parameters: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hash a password with a fresh random salt, returning a PHC string.
    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Ok(self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hash {
                message: format!("Hashing failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string())
    }

    /// Constant-time comparison of a candidate password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`, not an error; only a corrupt stored hash
    /// or parameter failure is an error.
    #[track_caller]
    pub fn verify(&self, password: &str, stored_hash: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::Hash {
            message: format!("Stored hash is not valid PHC format: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(self
            .argon2()?
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
