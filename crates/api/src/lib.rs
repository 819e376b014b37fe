//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for exchange rates, conversions and chart links
//! - Problem-style error responses
//! - Response types

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use fxrate_core::chart::ChartLinkService;
use fxrate_core::currency::{ExchangeService, RateStore};
use fxrate_shared::ChartConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Exchange calculator over the loaded rate table.
    pub exchange: Arc<ExchangeService>,
    /// Chart link lookup.
    pub charts: Arc<ChartLinkService>,
}

impl AppState {
    /// Builds state from a loaded store and chart configuration.
    pub fn new(store: RateStore, charts: &ChartConfig) -> Self {
        Self {
            exchange: Arc::new(ExchangeService::new(Arc::new(store))),
            charts: Arc::new(ChartLinkService::new(charts)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
