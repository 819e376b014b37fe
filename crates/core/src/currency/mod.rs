//! Currency rates, derivation and request tracking.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

#[cfg(test)]
mod props;

pub use error::{CurrencyRole, ExchangeError};
pub use service::ExchangeService;
pub use store::{RateStore, RequestCounts};
pub use types::{ConversionResult, CurrencyRecord, ExchangeResult, SupportEntry};
