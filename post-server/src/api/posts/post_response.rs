use crate::PostDto;
use serde::Serialize;

/// Single post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub message: String,
    pub post: PostDto,
}
