//! In-memory rate store with per-currency request counters.
//!
//! Currency records are loaded once and never mutated afterwards. The only
//! mutable state is one atomic counter per known code, so concurrent lookups
//! of the same currency are never lost.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use tracing::{debug, error, info};

use super::error::ExchangeError;
use super::types::CurrencyRecord;

/// Immutable currency table plus request counters.
///
/// Share it behind an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct RateStore {
    records: Vec<CurrencyRecord>,
    index: HashMap<String, usize>,
    counters: Vec<AtomicU64>,
}

impl RateStore {
    /// Builds a store from records, keeping their order.
    ///
    /// Every code is seeded with a request count of zero.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::DataSource` if a code is blank or duplicated,
    /// or a rate is not positive.
    pub fn from_records(records: Vec<CurrencyRecord>) -> Result<Self, ExchangeError> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if record.code.trim().is_empty() {
                return Err(ExchangeError::DataSource(format!(
                    "record {position} has an empty currency code"
                )));
            }
            if record.rate_to_eur <= Decimal::ZERO {
                return Err(ExchangeError::DataSource(format!(
                    "rate for {} must be positive, got {}",
                    record.code, record.rate_to_eur
                )));
            }
            if index.insert(record.code.clone(), position).is_some() {
                return Err(ExchangeError::DataSource(format!(
                    "duplicate currency code {}",
                    record.code
                )));
            }
        }

        let counters = records.iter().map(|_| AtomicU64::new(0)).collect();

        Ok(Self {
            records,
            index,
            counters,
        })
    }

    /// Parses a JSON array of currency records.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::DataSource` if the JSON is malformed or the
    /// records fail validation.
    pub fn from_json(json: &str) -> Result<Self, ExchangeError> {
        let records: Vec<CurrencyRecord> = serde_json::from_str(json)
            .map_err(|e| ExchangeError::DataSource(format!("malformed currency data: {e}")))?;
        Self::from_records(records)
    }

    /// Loads the currency table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::DataSource` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExchangeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to read currency data");
            ExchangeError::DataSource(format!("cannot read {}: {e}", path.display()))
        })?;

        let store = Self::from_json(&json).inspect_err(|e| {
            error!(path = %path.display(), error = %e, "Invalid currency data");
        })?;
        info!(
            path = %path.display(),
            currencies = store.len(),
            "Currency data loaded"
        );
        Ok(store)
    }

    /// Returns every record in load order.
    pub fn find_all(&self) -> &[CurrencyRecord] {
        &self.records
    }

    /// Looks up a record by exact, case-sensitive code.
    ///
    /// A hit increments that currency's request counter; unknown codes leave
    /// all counters untouched.
    pub fn find_by_code(&self, code: &str) -> Option<&CurrencyRecord> {
        let position = *self.index.get(code)?;
        let count = self.counters[position].fetch_add(1, Ordering::Relaxed) + 1;
        debug!(currency = code, count, "Currency looked up");
        Some(&self.records[position])
    }

    /// Returns a snapshot of the request counters in load order.
    pub fn request_counts(&self) -> RequestCounts {
        let entries = self
            .records
            .iter()
            .zip(&self.counters)
            .map(|(record, counter)| (record.code.clone(), counter.load(Ordering::Relaxed)))
            .collect();
        RequestCounts { entries }
    }

    /// Number of known currencies.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no currencies.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Point-in-time copy of the request counters.
///
/// Owned by the caller; changing it has no effect on the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestCounts {
    entries: Vec<(String, u64)>,
}

impl RequestCounts {
    /// Count for a code, if the code is known.
    pub fn get(&self, code: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(known, _)| known == code)
            .map(|(_, count)| *count)
    }

    /// Iterates `(code, count)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(code, count)| (code.as_str(), *count))
    }

    /// Number of codes in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets a count in this snapshot only.
    pub fn set(&mut self, code: &str, count: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|(known, _)| known == code) {
            entry.1 = count;
        }
    }
}

impl IntoIterator for RequestCounts {
    type Item = (String, u64);
    type IntoIter = std::vec::IntoIter<(String, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
