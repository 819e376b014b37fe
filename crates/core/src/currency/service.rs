//! Exchange service for EUR rates, cross rates and conversions.
//!
//! All rates are derived from the EUR-relative table held by [`RateStore`].
//! Rounding uses half-up (`MidpointAwayFromZero`) and is applied per stage:
//! - to-EUR rate: 3 decimal places
//! - cross rate: 2 decimal places, computed from the already rounded to-EUR rate
//!
//! Conversion amounts are `rate * quantity` with no further rounding.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use tracing::{debug, warn};

use super::error::{CurrencyRole, ExchangeError};
use super::store::RateStore;
use super::types::{
    ConversionResult, CurrencyRecord, EUR, EUROPE, ExchangeResult, SupportEntry,
};

/// Decimal places of a rate to EUR.
pub const EUR_RATE_SCALE: u32 = 3;

/// Decimal places of a cross rate.
pub const CROSS_RATE_SCALE: u32 = 2;

/// Exchange calculator over a shared [`RateStore`].
#[derive(Debug, Clone)]
pub struct ExchangeService {
    store: Arc<RateStore>,
}

impl ExchangeService {
    /// Creates a new exchange service.
    #[must_use]
    pub const fn new(store: Arc<RateStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &RateStore {
        &self.store
    }

    /// Rate of one unit of `currency` in EUR.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::InvalidInput` if `currency` is blank,
    /// `ExchangeError::NotFound` if it is unknown and
    /// `ExchangeError::RateOutOfRange` if the inverse overflows.
    pub fn rate_to_eur(&self, currency: &str) -> Result<ExchangeResult, ExchangeError> {
        let record = self.lookup(currency, CurrencyRole::From)?;
        let inverse = Decimal::ONE
            .checked_div(record.rate_to_eur)
            .ok_or_else(|| ExchangeError::RateOutOfRange {
                from: record.code.clone(),
                to: EUR.to_string(),
            })?;
        let rate = Self::round(inverse, EUR_RATE_SCALE);
        debug!(currency, %rate, "Derived rate to EUR");

        Ok(ExchangeResult {
            from_currency: record.code.clone(),
            to_currency: EUR.to_string(),
            from_country: record.country.clone(),
            to_country: EUROPE.to_string(),
            rate,
        })
    }

    /// Rate between two currencies, derived through EUR.
    ///
    /// `from` is validated and looked up before `to`, so a bad `to` still
    /// counts a request for `from`.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::InvalidInput` or `ExchangeError::NotFound` for
    /// whichever argument fails first, or `ExchangeError::RateOutOfRange` if
    /// the stored rates multiply beyond the decimal range.
    pub fn cross_rate(&self, from: &str, to: &str) -> Result<ExchangeResult, ExchangeError> {
        let from_result = self.rate_to_eur(from)?;
        let to_record = self.lookup(to, CurrencyRole::To)?;
        let product = to_record
            .rate_to_eur
            .checked_mul(from_result.rate)
            .ok_or_else(|| ExchangeError::RateOutOfRange {
                from: from.to_string(),
                to: to.to_string(),
            })?;
        let rate = Self::round(product, CROSS_RATE_SCALE);
        debug!(from, to, %rate, "Derived cross rate");

        Ok(ExchangeResult {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            from_country: from_result.from_country,
            to_country: to_record.country.clone(),
            rate,
        })
    }

    /// Converts `quantity` units of `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::cross_rate`], or
    /// `ExchangeError::QuantityOutOfRange` if the amount overflows.
    pub fn convert(
        &self,
        from: &str,
        to: &str,
        quantity: Decimal,
    ) -> Result<ConversionResult, ExchangeError> {
        let exchange = self.cross_rate(from, to)?;
        let amount = exchange
            .rate
            .checked_mul(quantity)
            .ok_or(ExchangeError::QuantityOutOfRange(quantity))?;

        Ok(ConversionResult {
            from: exchange.from_currency,
            to: exchange.to_currency,
            quantity,
            rate: exchange.rate,
            amount,
        })
    }

    /// Known currencies and how often each has been looked up, in load order.
    pub fn supported_currencies(&self) -> Vec<SupportEntry> {
        self.store
            .request_counts()
            .into_iter()
            .map(|(currency, times_requested)| SupportEntry {
                currency,
                times_requested,
            })
            .collect()
    }

    /// Round a decimal value half-up (away from zero on a tie).
    #[must_use]
    pub fn round(value: Decimal, decimal_places: u32) -> Decimal {
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
    }

    fn lookup(&self, currency: &str, role: CurrencyRole) -> Result<&CurrencyRecord, ExchangeError> {
        if currency.trim().is_empty() {
            return Err(ExchangeError::InvalidInput { role });
        }

        self.store.find_by_code(currency).ok_or_else(|| {
            warn!(currency, %role, "Unknown currency requested");
            ExchangeError::NotFound(currency.to_string())
        })
    }
}
