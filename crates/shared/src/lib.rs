//! Shared errors and configuration for Fxrate.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, ChartConfig, ChartLinkEntry, RatesConfig, ServerConfig};
pub use error::{AppError, AppResult};
