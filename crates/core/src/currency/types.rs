//! Currency domain types.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Quote currency of every EUR-relative rate.
pub const EUR: &str = "EUR";

/// Country reported for the EUR side of a rate.
pub const EUROPE: &str = "Europe";

/// Base attributes of a currency as loaded from the static table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyRecord {
    /// Currency code, e.g. "USD". Unique within the table.
    #[serde(rename = "currency")]
    pub code: String,
    /// Units of this currency per one EUR.
    #[serde(rename = "exchangeRate")]
    pub rate_to_eur: Decimal,
    /// Country or region issuing the currency.
    pub country: String,
    /// Free-form description, e.g. "US Dollars".
    pub description: String,
}

impl CurrencyRecord {
    /// Creates a new currency record.
    pub fn new(
        code: impl Into<String>,
        rate_to_eur: Decimal,
        country: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rate_to_eur,
            country: country.into(),
            description: description.into(),
        }
    }
}

/// Derived exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeResult {
    /// Base currency code.
    pub from_currency: String,
    /// Quote currency code.
    pub to_currency: String,
    /// Country of the base currency.
    pub from_country: String,
    /// Country of the quote currency.
    pub to_country: String,
    /// 1 from_currency = rate to_currency.
    pub rate: Decimal,
}

/// Quantity of one currency expressed in another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Base currency code.
    pub from: String,
    /// Quote currency code.
    pub to: String,
    /// Quantity of the base currency.
    pub quantity: Decimal,
    /// Cross rate used for the conversion.
    pub rate: Decimal,
    /// `quantity * rate`.
    pub amount: Decimal,
}

/// A currency paired with its cumulative lookup count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportEntry {
    /// Currency code.
    pub currency: String,
    /// Number of lookups since process start.
    pub times_requested: u64,
}
