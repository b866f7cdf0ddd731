//! Locale/currency lookup collaborator
//!
//! The generator never talks to a platform locale database directly. It asks a
//! [`LocaleCatalog`] three questions and treats every [`LookupError`] as
//! "skip this item": a locale without a currency, a locale that cannot render
//! a symbol, or a currency code nobody has heard of.

use crate::{Currency, CurrencyCode, LocaleId};
use std::collections::BTreeSet;
use thiserror::Error;

/// Expected per-item lookup failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The locale has no currency, or cannot render the requested one
    #[error("Locale {locale} unsupported: {reason}")]
    Unsupported { locale: LocaleId, reason: String },

    /// The currency code does not resolve to a known currency
    #[error("Unknown currency code {code:?}")]
    Unknown { code: String },
}

impl LookupError {
    pub fn unsupported(locale: &LocaleId, reason: impl Into<String>) -> Self {
        Self::Unsupported {
            locale: locale.clone(),
            reason: reason.into(),
        }
    }

    pub fn unknown(code: impl Into<String>) -> Self {
        Self::Unknown { code: code.into() }
    }
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Source of locale and currency facts
///
/// Implementations must be side-effect free: the aggregator may call any
/// method many times with the same arguments and expects the same answer.
pub trait LocaleCatalog {
    /// The currency a locale uses natively
    fn resolve_locale_currency(&self, locale: &LocaleId) -> LookupResult<Currency>;

    /// How `locale` displays `currency`; may be empty
    fn resolve_symbol(&self, currency: &Currency, locale: &LocaleId) -> LookupResult<String>;

    fn resolve_currency_by_code(&self, code: &str) -> LookupResult<Currency>;

    /// Every locale the catalog knows about
    fn all_locales(&self) -> BTreeSet<LocaleId>;

    /// Every currency code the catalog knows about
    fn all_currency_codes(&self) -> BTreeSet<CurrencyCode>;
}

impl<C: LocaleCatalog + ?Sized> LocaleCatalog for &C {
    fn resolve_locale_currency(&self, locale: &LocaleId) -> LookupResult<Currency> {
        (**self).resolve_locale_currency(locale)
    }

    fn resolve_symbol(&self, currency: &Currency, locale: &LocaleId) -> LookupResult<String> {
        (**self).resolve_symbol(currency, locale)
    }

    fn resolve_currency_by_code(&self, code: &str) -> LookupResult<Currency> {
        (**self).resolve_currency_by_code(code)
    }

    fn all_locales(&self) -> BTreeSet<LocaleId> {
        (**self).all_locales()
    }

    fn all_currency_codes(&self) -> BTreeSet<CurrencyCode> {
        (**self).all_currency_codes()
    }
}
