//! Post REST API handlers
//!
//! Every handler is gated by `CurrentUser`, which delegates token
//! verification to the identity service. The author of a post is always
//! the verified caller; the request body cannot claim another author.

use crate::{
    CreatePostRequest, CurrentUser, PostDto, PostListResponse, PostResponse,
    api::posts::post_dto::{AuthorDto, PostWithAuthorDto},
    state::AppState,
};

use mb_api::{ApiError, Result as ApiResult};
use mb_db::PostRepository;

use axum::{Json, extract::State, http::StatusCode};

/// POST /api/v1/posts
///
/// Create a post authored by the verified caller
pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Json(request): Json<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<PostResponse>)> {
    let (Some(title), Some(content)) = (request.title.as_deref(), request.content.as_deref())
    else {
        return Err(ApiError::validation(
            "Title and content are required",
            None,
        ));
    };

    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(ApiError::validation(
            "Title and content are required",
            None,
        ));
    }

    let repo = PostRepository::new(state.pool.clone());
    let post = repo.create(title, content, identity.id).await?;

    log::info!("User {} created post {}", identity.id, post.id);

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            message: "Post created successfully".to_string(),
            post: PostDto::from(post),
        }),
    ))
}

/// GET /api/v1/posts/me
///
/// List the verified caller's posts, newest first
pub async fn my_posts(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> ApiResult<Json<PostListResponse>> {
    let repo = PostRepository::new(state.pool.clone());
    let posts = repo.find_by_author(identity.id).await?;

    Ok(Json(PostListResponse {
        posts: posts
            .into_iter()
            .map(|post| PostWithAuthorDto {
                post: PostDto::from(post),
                user: AuthorDto::from(&identity),
            })
            .collect(),
    }))
}
