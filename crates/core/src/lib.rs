//! Core exchange logic for Fxrate.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `currency` - Rate store, EUR-relative and cross-rate derivation, conversion
//! - `chart` - Chart link lookup for currency pairs

pub mod chart;
pub mod currency;
