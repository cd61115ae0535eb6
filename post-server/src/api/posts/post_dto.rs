use mb_core::{Identity, Post};

use serde::Serialize;

/// Post DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: i64,
}

impl From<Post> for PostDto {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            author_id: p.author_id,
            created_at: p.created_at.timestamp(),
        }
    }
}

/// Author echo attached to listed posts. This service stores no user
/// rows, so the fields come from the verified identity of the request.
#[derive(Debug, Serialize)]
pub struct AuthorDto {
    pub id: i64,
    pub email: String,
}

impl From<&Identity> for AuthorDto {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
        }
    }
}

/// A post together with its author's identity
#[derive(Debug, Serialize)]
pub struct PostWithAuthorDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub user: AuthorDto,
}
