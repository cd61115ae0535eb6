pub mod error;
pub mod models;
pub mod store;

pub use error::{Result, StoreError};
pub use models::identity::Identity;
pub use models::post::Post;
pub use models::user::User;
pub use store::{CredentialStore, NewUser};

pub use error_location::ErrorLocation;
