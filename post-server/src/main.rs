use post_server::{AppState, build_router};

use mb_auth::DelegatedVerifier;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = mb_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let config_dir = mb_config::Config::config_dir()?;
    mb_config::initialize_logger(&config.logging, &config_dir)?;

    info!("Starting post-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Token verification is delegated to the identity peer; no signing
    // secret ever reaches this process.
    let verifier = Arc::new(DelegatedVerifier::new(
        &config.peer.identity_url,
        Duration::from_secs(config.peer.request_timeout_secs),
    )?);

    // Initialize database pool and schema
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = mb_db::connect(&database_path).await?;

    info!("Running database migrations...");
    mb_db::run_post_migrations(&pool).await?;
    info!("Migrations complete");

    let app = build_router(AppState { pool, verifier });

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    Ok(())
}
