mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logger;
mod logging_config;
mod peer_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logger::initialize_logger;
pub use logging_config::LoggingConfig;
pub use peer_config::PeerConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
const MIN_JWT_SECRET_LEN: usize = 32;
const DEFAULT_HASH_MEMORY_KIB: u32 = 19456;
const DEFAULT_HASH_ITERATIONS: u32 = 2;
const DEFAULT_HASH_PARALLELISM: u32 = 1;
const DEFAULT_IDENTITY_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_PEER_TIMEOUT_SECS: u64 = 5;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
