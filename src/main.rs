//! Bank Ledger Service - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Initialize tracing from `RUST_LOG`
//! 2. Load configuration from environment variables
//! 3. Create an empty in-memory bank
//! 4. Build the HTTP router
//! 5. Start server on the configured address

use bank_ledger::{app, config::Config, state};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let state = state::create_state();
    let app = app(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
