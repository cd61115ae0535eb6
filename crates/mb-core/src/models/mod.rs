pub mod identity;
pub mod post;
pub mod user;
