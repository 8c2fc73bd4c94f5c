// Ledger API - Web Server
// In-memory banking ledger served with Axum

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use ledger_api::{router, AppState, Config};

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    // State lives for the life of the process; nothing is persisted
    let app = router(AppState::new());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Ledger server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
