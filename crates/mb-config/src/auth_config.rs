use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_TOKEN_TTL_SECS, MIN_JWT_SECRET_LEN,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Must be identical in every service that
    /// decodes tokens locally; the delegated path never needs it.
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    /// Argon2id cost parameters
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.jwt_secret.is_empty() && self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} bytes",
                MIN_JWT_SECRET_LEN
            )));
        }

        if self.token_ttl_secs <= 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be positive"));
        }

        if self.hash_iterations == 0 || self.hash_parallelism == 0 {
            return Err(ConfigError::auth(
                "auth.hash_iterations and auth.hash_parallelism must be positive",
            ));
        }

        Ok(())
    }

    /// The signing secret, required for services that mint or locally
    /// decode tokens (the identity service). The posts service never
    /// calls this.
    pub fn require_secret(&self) -> ConfigErrorResult<&str> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::auth(
                "auth.jwt_secret must be set (config.toml or MB_AUTH_JWT_SECRET)",
            ));
        }
        Ok(&self.jwt_secret)
    }
}
