use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_URL, DEFAULT_PEER_TIMEOUT_SECS};

use serde::Deserialize;

/// Where the posts service finds the identity service, and how long it
/// will wait for an answer before denying a request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PeerConfig {
    pub identity_url: String,
    pub request_timeout_secs: u64,
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            identity_url: String::from(DEFAULT_IDENTITY_URL),
            request_timeout_secs: DEFAULT_PEER_TIMEOUT_SECS,
        }
    }
}

impl PeerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.identity_url.is_empty() {
            return Err(ConfigError::peer("peer.identity_url must not be empty"));
        }

        if !self.identity_url.starts_with("http://") && !self.identity_url.starts_with("https://") {
            return Err(ConfigError::peer(format!(
                "peer.identity_url must be an http(s) URL, got {}",
                self.identity_url
            )));
        }

        // A zero timeout would let a stalled identity service block the
        // posts service indefinitely.
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::peer(
                "peer.request_timeout_secs must be positive",
            ));
        }

        Ok(())
    }
}
