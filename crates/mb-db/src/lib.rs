pub mod error;
pub mod pool;
pub mod repositories;

pub use error::{DbError, Result};
pub use pool::{connect, run_identity_migrations, run_post_migrations};
pub use repositories::post_repository::PostRepository;
pub use repositories::user_repository::UserRepository;
