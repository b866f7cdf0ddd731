//! # Currency Aggregator
//!
//! ## Purpose
//!
//! Decides what goes into the currency table:
//! - Groups input locales by the currency each one uses natively
//! - Collects, per currency, every display symbol the input locales render
//! - Picks one default symbol per currency with a deterministic tie-break
//! - Adds explicitly requested currency codes that no locale reached
//!
//! ## Architecture Role
//!
//! ```text
//! TableCatalog (TOML) → [Aggregator] → Vec<CurrencyRecord> → codec
//! ```
//!
//! The aggregator only sees the catalog through the
//! [`currency_types::LocaleCatalog`] trait, so tests and other data sources
//! can stand in for [`TableCatalog`].

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod options;
pub mod symbols;

pub use aggregate::{aggregate, Aggregator};
pub use catalog::TableCatalog;
pub use error::{CatalogError, CatalogResult};
pub use options::{AggregateOptions, DefaultSymbolScope};
pub use symbols::{most_popular_symbol, symbol_map};
