pub mod api;
pub mod health;
pub mod routes;
pub mod state;

pub use api::{
    extractors::current_user::CurrentUser,
    posts::{
        create_post_request::CreatePostRequest,
        post_dto::PostDto,
        post_list_response::PostListResponse,
        post_response::PostResponse,
        posts::{create_post, my_posts},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
