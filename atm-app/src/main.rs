//! # ATM Banking Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the SQLite store
//! - Create the three dispatch services
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atm_hex::{CrudService, inbound::HttpServer};
use atm_repo::build_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,atm_app=debug,atm_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting ATM banking server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);

    // Build the store (handles connection and migration)
    let store = build_store(&config.database_url).await?;

    // Create one dispatch service per record type
    let server = HttpServer::new(
        CrudService::new(store.accounts()),
        CrudService::new(store.customers()),
        CrudService::new(store.transactions()),
    );

    // Run the HTTP server
    let addr = format!("0.0.0.0:{}", config.port);
    server.run(&addr).await?;

    Ok(())
}
