//! Exchange error types.

use std::fmt;

use fxrate_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// The position a currency code takes in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyRole {
    /// Base currency, converted from.
    From,
    /// Quote currency, converted to.
    To,
}

impl fmt::Display for CurrencyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => write!(f, "from"),
            Self::To => write!(f, "to"),
        }
    }
}

/// Exchange-related errors.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Currency code argument is empty or blank.
    #[error("The given {role} can't be null or empty")]
    InvalidInput {
        /// Which argument was blank.
        role: CurrencyRole,
    },

    /// No record exists for a well-formed currency code.
    #[error("No currency found for {0}")]
    NotFound(String),

    /// No chart link is configured for the currency pair.
    #[error("No currency chart url found for {0}")]
    ChartLinkNotFound(String),

    /// Quantity produces an amount outside the decimal range.
    #[error("Quantity {0} is out of range")]
    QuantityOutOfRange(Decimal),

    /// Stored rates combine into a value outside the decimal range.
    #[error("Rate from {from} to {to} is out of range")]
    RateOutOfRange {
        /// Base currency code.
        from: String,
        /// Quote currency code.
        to: String,
    },

    /// The static currency data could not be loaded.
    #[error("Failed to load currency data: {0}")]
    DataSource(String),
}

impl From<ExchangeError> for AppError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::InvalidInput { .. } | ExchangeError::QuantityOutOfRange(_) => {
                Self::Validation(err.to_string())
            }
            ExchangeError::NotFound(_) | ExchangeError::ChartLinkNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            ExchangeError::RateOutOfRange { .. } => Self::Internal(err.to_string()),
            ExchangeError::DataSource(_) => Self::DataSource(err.to_string()),
        }
    }
}
