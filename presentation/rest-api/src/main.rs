use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Recipes REST API entry point
///
/// - config/: environment-driven settings (server, CORS, database, auth)
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();
    if config.auth.is_none() {
        tracing::warn!("JWT_SECRET is not set; authenticated routes will answer 401");
    }

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
