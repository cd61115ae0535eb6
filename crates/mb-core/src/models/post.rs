//! Post entity - content owned by the resource service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post authored by a verified user. `author_id` references a user in
/// the identity service's store; the posts database holds no user rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}
