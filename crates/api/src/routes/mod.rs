//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod charts;
pub mod conversion;
pub mod exchange;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(exchange::routes())
        .merge(conversion::routes())
        .merge(charts::routes())
}
