pub mod auth;
pub mod extractors;
