//! Currency pair chart link routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::Uri,
    routing::get,
};
use fxrate_core::chart::ChartLink;
use serde::Serialize;

use crate::{AppState, error::ApiError};

/// Creates the chart link routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/exchange/linkTo/{currency_pair}", get(get_chart_link))
}

/// Response for a chart link lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLinkResponse {
    /// Chart URL for the requested pair.
    pub currency_pair: String,
}

impl From<ChartLink> for ChartLinkResponse {
    fn from(link: ChartLink) -> Self {
        Self {
            currency_pair: link.currency_pair,
        }
    }
}

/// GET `/exchange/linkTo/{currency_pair}` - Chart URL for a currency pair.
async fn get_chart_link(
    State(state): State<AppState>,
    uri: Uri,
    Path(currency_pair): Path<String>,
) -> Result<Json<ChartLinkResponse>, ApiError> {
    let link = state
        .charts
        .chart_link(&currency_pair)
        .map_err(|e| ApiError::new(e, &uri))?;

    Ok(Json(link.into()))
}
