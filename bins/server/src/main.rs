//! Fxrate API Server
//!
//! Main entry point for the Fxrate exchange service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxrate_api::{AppState, create_router};
use fxrate_core::currency::RateStore;
use fxrate_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fxrate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Load the static rate table; the service cannot run without it
    let store = RateStore::load(&config.rates.data_path)
        .with_context(|| format!("Failed to load rates from {}", config.rates.data_path))?;
    info!(
        currencies = store.len(),
        chart_links = config.charts.links.len(),
        "Rate table ready"
    );

    // Create application state
    let state = AppState::new(store, &config.charts);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
