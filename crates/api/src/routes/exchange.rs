//! Exchange rate and supported currency routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::Uri,
    routing::get,
};
use fxrate_core::currency::{ExchangeResult, SupportEntry};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{AppState, error::ApiError};

/// Creates the exchange rate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/currency/exchange/rate/from/{from}/to/EUR",
            get(get_rate_to_eur),
        )
        .route(
            "/currency/exchange/rate/from/{from}/to/{to}",
            get(get_cross_rate),
        )
        .route(
            "/currency/exchange/supported/currencies",
            get(list_supported_currencies),
        )
}

/// Response for an exchange rate lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResponse {
    /// Base currency code.
    pub from_currency: String,
    /// Quote currency code.
    pub to_currency: String,
    /// Country of the base currency.
    pub from_country: String,
    /// Country of the quote currency.
    pub to_country: String,
    /// 1 from_currency = exchange_rate to_currency.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub exchange_rate: Decimal,
}

impl From<ExchangeResult> for ExchangeRateResponse {
    fn from(result: ExchangeResult) -> Self {
        Self {
            from_currency: result.from_currency,
            to_currency: result.to_currency,
            from_country: result.from_country,
            to_country: result.to_country,
            exchange_rate: result.rate,
        }
    }
}

/// Response item for a supported currency.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySupportResponse {
    /// Currency code.
    pub currency: String,
    /// Number of times the currency has been looked up.
    pub num_of_times: u64,
}

impl From<SupportEntry> for CurrencySupportResponse {
    fn from(entry: SupportEntry) -> Self {
        Self {
            currency: entry.currency,
            num_of_times: entry.times_requested,
        }
    }
}

/// GET `/currency/exchange/rate/from/{from}/to/EUR` - Rate of one unit in EUR.
async fn get_rate_to_eur(
    State(state): State<AppState>,
    uri: Uri,
    Path(from): Path<String>,
) -> Result<Json<ExchangeRateResponse>, ApiError> {
    let result = state
        .exchange
        .rate_to_eur(&from)
        .map_err(|e| ApiError::new(e, &uri))?;

    Ok(Json(result.into()))
}

/// GET `/currency/exchange/rate/from/{from}/to/{to}` - Cross rate via EUR.
async fn get_cross_rate(
    State(state): State<AppState>,
    uri: Uri,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<ExchangeRateResponse>, ApiError> {
    let result = state
        .exchange
        .cross_rate(&from, &to)
        .map_err(|e| ApiError::new(e, &uri))?;

    Ok(Json(result.into()))
}

/// GET `/currency/exchange/supported/currencies` - Currencies and lookup counts.
async fn list_supported_currencies(
    State(state): State<AppState>,
) -> Json<Vec<CurrencySupportResponse>> {
    let response = state
        .exchange
        .supported_currencies()
        .into_iter()
        .map(CurrencySupportResponse::from)
        .collect();

    Json(response)
}
