//! User entity - the durable credential record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account. Owned exclusively by the identity service's
/// credential store; the posts service never sees this type.
///
/// `password_hash` is a PHC-format argon2 string and is deliberately
/// excluded from serialization so it can never leak into a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique across the store (enforced by the store, not the service layer)
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
