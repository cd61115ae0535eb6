//! Request-scoped identity attached after successful token verification.

use serde::{Deserialize, Serialize};

/// The verified subject of an in-flight request.
///
/// Produced by a verifier, threaded to handlers by an extractor, and
/// discarded when the request completes. Contains only non-secret fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub email: String,
}
