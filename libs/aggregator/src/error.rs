//! Catalog loading errors
//!
//! Unlike [`currency_types::LookupError`], which the aggregator swallows item
//! by item, a [`CatalogError`] means the catalog itself is unusable and the
//! whole generation run stops.

use currency_types::{CurrencyCodeError, LocaleId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid currency {code:?}: {source}")]
    InvalidCurrency {
        code: String,
        #[source]
        source: CurrencyCodeError,
    },

    #[error("Duplicate currency {code}")]
    DuplicateCurrency { code: String },

    #[error("Duplicate locale {locale}")]
    DuplicateLocale { locale: LocaleId },

    /// A locale names a currency the catalog does not define
    #[error("Locale {locale} references unknown currency {code:?}")]
    UnknownCurrencyReference { locale: LocaleId, code: String },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
