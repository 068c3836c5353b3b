//! SwapSafe catalog service
//!
//! Serves identifier validation and duplicate-listing checks for the
//! listing flow.

use std::sync::Arc;

use anyhow::Result;
use swapsafe_catalog::{api, config, state::AppState, store::InMemoryListingStore};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to SWAPSAFE_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting SwapSafe catalog service");
    info!(listen_addr = %config.listen_addr, "Configuration loaded");

    let store = InMemoryListingStore::new();
    if let Some(path) = &config.seed_listings {
        match store.load_json(path).await {
            Ok(count) => info!(count, path = %path.display(), "Seed listings loaded"),
            Err(e) => {
                error!(error = %e, path = %path.display(), "Failed to load seed listings");
                return Err(e.into());
            }
        }
    }

    let state = AppState::new(Arc::new(store));
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Received shutdown signal");
        })
        .await?;

    info!("Catalog service shutdown complete");
    Ok(())
}
