//! # Table Catalog
//!
//! ## Purpose
//!
//! A [`LocaleCatalog`] backed by an in-memory table, normally loaded from a
//! TOML data file. It stands in for the platform locale database the
//! generator would otherwise need.
//!
//! ## Data File
//!
//! ```toml
//! [[currency]]
//! code = "NZD"
//! fraction_digits = 2
//! numeric_code = 554
//! symbol = "NZ$"
//!
//! [[locale]]
//! tag = "en-NZ"
//! currency = "NZD"
//! [locale.symbols]
//! NZD = "$"
//! ```
//!
//! `symbol` is the fallback display for locales without an override and
//! defaults to the currency code. A locale without `currency` has none.
//! Tags are canonicalised on load (`EN_nz` → `en-NZ`).

use crate::error::{CatalogError, CatalogResult};
use currency_types::{
    Currency, CurrencyCode, LocaleCatalog, LocaleId, LookupError, LookupResult,
};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    currency: Vec<CurrencyEntry>,
    #[serde(default)]
    locale: Vec<LocaleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CurrencyEntry {
    code: String,
    fraction_digits: i32,
    numeric_code: i32,
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocaleEntry {
    tag: String,
    currency: Option<String>,
    #[serde(default)]
    symbols: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
struct CurrencyData {
    currency: Currency,
    fallback_symbol: String,
}

#[derive(Debug, Clone, Default)]
struct LocaleData {
    currency: Option<CurrencyCode>,
    symbols: BTreeMap<CurrencyCode, String>,
}

#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    currencies: BTreeMap<CurrencyCode, CurrencyData>,
    locales: BTreeMap<LocaleId, LocaleData>,
}

impl TableCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            currencies = catalog.currencies.len(),
            locales = catalog.locales.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(text: &str) -> CatalogResult<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        let mut catalog = Self::new();

        for entry in file.currency {
            let currency = Currency::new(&entry.code, entry.fraction_digits, entry.numeric_code)
                .map_err(|source| CatalogError::InvalidCurrency {
                    code: entry.code.clone(),
                    source,
                })?;
            catalog.insert_currency(currency, entry.symbol)?;
        }

        for entry in file.locale {
            catalog.insert_locale(&entry.tag, entry.currency.as_deref(), entry.symbols)?;
        }

        Ok(catalog)
    }

    /// Add a currency; `symbol` defaults to the code
    pub fn with_currency(mut self, currency: Currency, symbol: Option<&str>) -> CatalogResult<Self> {
        self.insert_currency(currency, symbol.map(str::to_string))?;
        Ok(self)
    }

    /// Add a locale with its native currency and per-currency symbol overrides
    pub fn with_locale(
        mut self,
        tag: &str,
        currency: Option<&str>,
        symbols: &[(&str, &str)],
    ) -> CatalogResult<Self> {
        let symbols = symbols
            .iter()
            .map(|(code, symbol)| (code.to_string(), symbol.to_string()))
            .collect();
        self.insert_locale(tag, currency, symbols)?;
        Ok(self)
    }

    pub fn currency_count(&self) -> usize {
        self.currencies.len()
    }

    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }

    fn insert_currency(&mut self, currency: Currency, symbol: Option<String>) -> CatalogResult<()> {
        if self.currencies.contains_key(&currency.code) {
            return Err(CatalogError::DuplicateCurrency {
                code: currency.code.to_string(),
            });
        }
        let fallback_symbol = symbol.unwrap_or_else(|| currency.code.to_string());
        self.currencies.insert(
            currency.code.clone(),
            CurrencyData {
                currency,
                fallback_symbol,
            },
        );
        Ok(())
    }

    fn insert_locale(
        &mut self,
        tag: &str,
        currency: Option<&str>,
        symbols: BTreeMap<String, String>,
    ) -> CatalogResult<()> {
        let locale = LocaleId::canonical(tag);
        if self.locales.contains_key(&locale) {
            return Err(CatalogError::DuplicateLocale { locale });
        }

        let currency = currency
            .map(|code| self.known_code(&locale, code))
            .transpose()?;
        let symbols = symbols
            .into_iter()
            .map(|(code, symbol)| Ok((self.known_code(&locale, &code)?, symbol)))
            .collect::<CatalogResult<_>>()?;

        self.locales.insert(locale, LocaleData { currency, symbols });
        Ok(())
    }

    fn known_code(&self, locale: &LocaleId, code: &str) -> CatalogResult<CurrencyCode> {
        self.currencies
            .get_key_value(code)
            .map(|(code, _)| code.clone())
            .ok_or_else(|| CatalogError::UnknownCurrencyReference {
                locale: locale.clone(),
                code: code.to_string(),
            })
    }

    fn locale(&self, locale: &LocaleId) -> LookupResult<&LocaleData> {
        self.locales
            .get(locale)
            .ok_or_else(|| LookupError::unsupported(locale, "locale not in catalog"))
    }
}

impl LocaleCatalog for TableCatalog {
    fn resolve_locale_currency(&self, locale: &LocaleId) -> LookupResult<Currency> {
        let code = self
            .locale(locale)?
            .currency
            .as_ref()
            .ok_or_else(|| LookupError::unsupported(locale, "locale has no currency"))?;
        self.currencies
            .get(code)
            .map(|data| data.currency.clone())
            .ok_or_else(|| LookupError::unsupported(locale, format!("currency {code} missing")))
    }

    fn resolve_symbol(&self, currency: &Currency, locale: &LocaleId) -> LookupResult<String> {
        let data = self.locale(locale)?;
        if let Some(symbol) = data.symbols.get(&currency.code) {
            return Ok(symbol.clone());
        }
        Ok(self
            .currencies
            .get(&currency.code)
            .map(|data| data.fallback_symbol.clone())
            .unwrap_or_else(|| currency.code.to_string()))
    }

    fn resolve_currency_by_code(&self, code: &str) -> LookupResult<Currency> {
        self.currencies
            .get(code)
            .map(|data| data.currency.clone())
            .ok_or_else(|| LookupError::unknown(code))
    }

    fn all_locales(&self) -> BTreeSet<LocaleId> {
        self.locales.keys().cloned().collect()
    }

    fn all_currency_codes(&self) -> BTreeSet<CurrencyCode> {
        self.currencies.keys().cloned().collect()
    }
}
