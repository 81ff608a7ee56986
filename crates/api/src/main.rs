use anyhow::{Context, Result};
use persistence::{EventLogStore, MemoryStore, SheetsStore};
use std::sync::Arc;
use tracing::{info, warn};

use wardrobe_ledger_api::{
    app,
    config::{Config, StoreKind},
    middleware,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics().context("Failed to install metrics recorder")?;

    info!("Starting Wardrobe Ledger API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn EventLogStore> = match config.store.kind {
        StoreKind::Sheets => {
            let store = SheetsStore::new(config.sheet.clone())
                .context("Failed to set up the Google Sheets store")?;
            // Resolve early so misconfiguration shows up in the startup logs.
            // Requests keep retrying resolution until it succeeds.
            match store.worksheet().await {
                Ok(handle) => info!(
                    spreadsheet_id = %handle.spreadsheet_id,
                    worksheet = %handle.title,
                    "Event log worksheet ready"
                ),
                Err(e) => warn!(error = %e, "Event log worksheet not reachable yet"),
            }
            Arc::new(store)
        }
        StoreKind::Memory => {
            warn!("Using in-memory event log; entries are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let addr = config.socket_addr().context("Invalid server address")?;
    let app = app::create_app(config, store);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
