use crate::api::posts::post_dto::PostWithAuthorDto;
use serde::Serialize;

/// Post list response
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostWithAuthorDto>,
}
