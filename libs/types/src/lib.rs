//! # Currency Table Types
//!
//! Shared data model for the currency table generator.
//!
//! ## Design Philosophy
//!
//! - **Build Once, Read Once**: every value here is constructed per generation
//!   run and never mutated after the aggregator hands it to the encoder
//! - **Ordered Collections**: locale sets and symbol maps are `BTreeSet`/`BTreeMap`
//!   so iteration order is always ascending and the encoded output is stable
//! - **Per-Item Failures**: lookups report [`LookupError`] which callers drop
//!   item by item rather than aborting a run
//!
//! ## Quick Start
//!
//! ```rust
//! use currency_types::{Currency, CurrencyRecord, LocaleId};
//!
//! let nzd = Currency::new("NZD", 2, 554).unwrap();
//! let record = CurrencyRecord::new(nzd, "$")
//!     .with_locales([LocaleId::new("en-NZ")]);
//!
//! assert_eq!(record.code(), "NZD");
//! assert!(record.symbol_variants.is_empty());
//! ```

pub mod catalog;
pub mod currency;
pub mod locale;
pub mod record;
pub mod selector;

pub use catalog::{LocaleCatalog, LookupError, LookupResult};
pub use currency::{Currency, CurrencyCode, CurrencyCodeError};
pub use locale::LocaleId;
pub use record::{CurrencyRecord, LocaleSet, SymbolVariants};
pub use selector::Selector;
