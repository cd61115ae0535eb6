pub mod create_post_request;
pub mod post_dto;
pub mod post_list_response;
pub mod post_response;
pub mod posts;
