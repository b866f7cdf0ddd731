//! # Currency Aggregation
//!
//! ## Purpose
//!
//! Turns a set of locales plus a list of explicit currency codes into the
//! sorted, deduplicated [`CurrencyRecord`] list the encoder writes.
//!
//! ## Pipeline
//!
//! ```text
//! locales ──resolve──→ currency → native locales ──┐
//!                                                  ├─→ Emitted (by code) → sorted records
//! explicit codes ──resolve──→ currency (if unseen) ┘
//! ```
//!
//! Both paths compute symbol variants over the full input locale set, since a
//! locale can display a currency that is not its own. Locale-derived records
//! are folded in first, so when a code is reachable both ways the explicit
//! occurrence is dropped and the native locales survive.
//!
//! Every lookup failure skips that one locale or code; aggregation itself
//! never fails.

use crate::options::{AggregateOptions, DefaultSymbolScope};
use crate::symbols::{most_popular_symbol, symbol_map};
use currency_types::{
    Currency, CurrencyCode, CurrencyRecord, LocaleCatalog, LocaleId, LocaleSet, SymbolVariants,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Records emitted so far, keyed by currency code
#[derive(Debug, Default)]
struct Emitted {
    records: BTreeMap<CurrencyCode, CurrencyRecord>,
}

impl Emitted {
    fn contains(&self, code: &CurrencyCode) -> bool {
        self.records.contains_key(code)
    }

    /// First record for a code wins
    fn with_record(mut self, record: CurrencyRecord) -> Self {
        self.records
            .entry(record.currency.code.clone())
            .or_insert(record);
        self
    }

    fn into_records(self) -> Vec<CurrencyRecord> {
        self.records.into_values().collect()
    }
}

pub struct Aggregator<'c, C: LocaleCatalog + ?Sized> {
    catalog: &'c C,
    options: AggregateOptions,
}

impl<'c, C: LocaleCatalog + ?Sized> Aggregator<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self {
            catalog,
            options: AggregateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AggregateOptions) -> Self {
        self.options = options;
        self
    }

    /// Build one record per distinct currency, sorted by code
    pub fn aggregate<I, S>(&self, locales: &BTreeSet<LocaleId>, explicit_codes: I) -> Vec<CurrencyRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let voters = match self.options.default_symbol_scope {
            DefaultSymbolScope::Input => None,
            DefaultSymbolScope::Catalog => Some(self.catalog.all_locales()),
        };

        let emitted = self
            .group_by_currency(locales)
            .into_values()
            .fold(Emitted::default(), |emitted, (currency, native)| {
                let record = self.locale_record(currency, native, locales, voters.as_ref());
                emitted.with_record(record)
            });

        let emitted = explicit_codes
            .into_iter()
            .fold(emitted, |emitted, code| {
                match self.explicit_record(code.as_ref(), locales, &emitted) {
                    Some(record) => emitted.with_record(record),
                    None => emitted,
                }
            });

        let records = emitted.into_records();
        debug!(
            locales = locales.len(),
            records = records.len(),
            "Aggregated currency records"
        );
        records
    }

    /// Resolve each locale's own currency and collect the locales per currency
    fn group_by_currency(
        &self,
        locales: &BTreeSet<LocaleId>,
    ) -> BTreeMap<CurrencyCode, (Currency, LocaleSet)> {
        locales
            .iter()
            .filter_map(|locale| match self.catalog.resolve_locale_currency(locale) {
                Ok(currency) => Some((currency, locale)),
                Err(err) => {
                    debug!(%locale, error = %err, "Skipping locale without currency");
                    None
                }
            })
            .fold(BTreeMap::new(), |mut grouped, (currency, locale)| {
                grouped
                    .entry(currency.code.clone())
                    .or_insert_with(|| (currency, LocaleSet::new()))
                    .1
                    .insert(locale.clone());
                grouped
            })
    }

    fn locale_record(
        &self,
        currency: Currency,
        native: LocaleSet,
        locales: &BTreeSet<LocaleId>,
        voters: Option<&BTreeSet<LocaleId>>,
    ) -> CurrencyRecord {
        let symbols = symbol_map(self.catalog, &currency, locales);
        let default_symbol = match voters {
            None => pick_default(&currency, &symbols),
            Some(voters) => pick_default(&currency, &symbol_map(self.catalog, &currency, voters)),
        };

        CurrencyRecord::new(currency, default_symbol)
            .with_locales(native)
            .with_symbol_map(symbols)
    }

    /// Record for a code no input locale resolved to, displayed as its own code
    fn explicit_record(
        &self,
        code: &str,
        locales: &BTreeSet<LocaleId>,
        emitted: &Emitted,
    ) -> Option<CurrencyRecord> {
        let currency = match self.catalog.resolve_currency_by_code(code) {
            Ok(currency) => currency,
            Err(err) => {
                debug!(code, error = %err, "Skipping unknown currency code");
                return None;
            }
        };
        if emitted.contains(&currency.code) {
            debug!(code, "Currency already emitted from locales");
            return None;
        }

        let symbols = symbol_map(self.catalog, &currency, locales);
        let default_symbol = currency.code.to_string();
        Some(CurrencyRecord::new(currency, default_symbol).with_symbol_map(symbols))
    }
}

/// Most popular symbol, or the currency code when no locale renders one
fn pick_default(currency: &Currency, symbols: &SymbolVariants) -> String {
    most_popular_symbol(symbols)
        .map(str::to_string)
        .unwrap_or_else(|| currency.code.to_string())
}

/// [`Aggregator::aggregate`] with default options
pub fn aggregate<C, I, S>(catalog: &C, locales: &BTreeSet<LocaleId>, explicit_codes: I) -> Vec<CurrencyRecord>
where
    C: LocaleCatalog + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Aggregator::new(catalog).aggregate(locales, explicit_codes)
}
