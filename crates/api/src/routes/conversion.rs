//! Currency conversion routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::Uri,
    routing::get,
};
use fxrate_core::currency::ConversionResult;
use fxrate_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{AppState, error::ApiError};

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/exchange/conversion/from/{from}/to/{to}/quantity/{quantity}",
        get(get_conversion),
    )
}

/// Response for a currency conversion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    /// Base currency code.
    pub from: String,
    /// Quote currency code.
    pub to: String,
    /// Quantity of the base currency.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub quantity: Decimal,
    /// Cross rate used.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub exchange_rate: Decimal,
    /// Quantity expressed in the quote currency.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub calculate_amount: Decimal,
}

impl From<ConversionResult> for ConversionResponse {
    fn from(result: ConversionResult) -> Self {
        Self {
            from: result.from,
            to: result.to,
            quantity: result.quantity,
            exchange_rate: result.rate,
            calculate_amount: result.amount,
        }
    }
}

/// Parses the quantity path segment as an exact decimal.
fn parse_quantity(raw: &str) -> AppResult<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| {
            AppError::TypeMismatch(format!(
                "Incorrect value '{raw}' for field 'quantity'. Expected value of type 'decimal'"
            ))
        })
}

/// GET `/exchange/conversion/from/{from}/to/{to}/quantity/{quantity}` - Convert a quantity.
async fn get_conversion(
    State(state): State<AppState>,
    uri: Uri,
    Path((from, to, quantity)): Path<(String, String, String)>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let quantity = parse_quantity(&quantity).map_err(|e| ApiError::new(e, &uri))?;

    let result = state
        .exchange
        .convert(&from, &to, quantity)
        .map_err(|e| ApiError::new(e, &uri))?;

    Ok(Json(result.into()))
}
