//! Envelope Router server binary.
//!
//! Serves the built-in routes (favicon, health, OpenAPI document) behind the
//! configured CORS policy and access log.

use axum::Router;
use tokio::net::TcpListener;

use envelope_router::{config::Config, initialize, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting Envelope Router v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("{}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        base_path = %config.server.base_path,
        cors_origins = ?config.cors.effective_origins(),
        "Configuration loaded"
    );

    let app = initialize(&config, Router::new()).map_err(|e| {
        tracing::error!(error = %e, "Failed to build router");
        anyhow::anyhow!("Router bootstrap error: {}", e)
    })?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
