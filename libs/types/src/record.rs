//! The per-currency aggregate consumed by the encoder

use crate::{Currency, LocaleId};
use std::collections::{BTreeMap, BTreeSet};

/// Locales in ascending string order
pub type LocaleSet = BTreeSet<LocaleId>;

/// Display symbol → locales rendering it, keys in ascending string order
pub type SymbolVariants = BTreeMap<String, LocaleSet>;

/// One record of the generated table
///
/// `symbol_variants` never contains `default_symbol` as a key: the default
/// is represented once, by the field itself. The builder methods below keep
/// that true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRecord {
    pub currency: Currency,
    pub default_symbol: String,
    /// Locales whose own currency is this one; empty for explicit-code records
    pub locales: LocaleSet,
    pub symbol_variants: SymbolVariants,
}

impl CurrencyRecord {
    pub fn new(currency: Currency, default_symbol: impl Into<String>) -> Self {
        Self {
            currency,
            default_symbol: default_symbol.into(),
            locales: LocaleSet::new(),
            symbol_variants: SymbolVariants::new(),
        }
    }

    pub fn with_locales(mut self, locales: impl IntoIterator<Item = LocaleId>) -> Self {
        self.locales.extend(locales);
        self
    }

    /// Attach a symbol map, dropping the entry for the default symbol
    pub fn with_symbol_map(mut self, mut symbols: SymbolVariants) -> Self {
        symbols.remove(&self.default_symbol);
        self.symbol_variants.extend(symbols);
        self
    }

    pub fn with_symbol_variant(
        mut self,
        symbol: impl Into<String>,
        locales: impl IntoIterator<Item = LocaleId>,
    ) -> Self {
        let symbol = symbol.into();
        if symbol != self.default_symbol {
            self.symbol_variants
                .entry(symbol)
                .or_default()
                .extend(locales);
        }
        self
    }

    pub fn code(&self) -> &str {
        self.currency.code()
    }

    /// True when no input locale resolved to this currency
    pub fn is_explicit_only(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur() -> Currency {
        Currency::new("EUR", 2, 978).unwrap()
    }

    #[test]
    fn test_symbol_map_drops_default() {
        let mut symbols = SymbolVariants::new();
        symbols.insert("€".to_string(), [LocaleId::new("de-DE")].into());
        symbols.insert("EUR".to_string(), [LocaleId::new("de-CH")].into());

        let record = CurrencyRecord::new(eur(), "€").with_symbol_map(symbols);

        assert_eq!(record.symbol_variants.len(), 1);
        assert!(record.symbol_variants.contains_key("EUR"));
        assert!(!record.symbol_variants.contains_key("€"));
    }

    #[test]
    fn test_symbol_variant_ignores_default() {
        let record = CurrencyRecord::new(eur(), "€")
            .with_symbol_variant("€", [LocaleId::new("de-DE")])
            .with_symbol_variant("EUR", [LocaleId::new("de-LI"), LocaleId::new("de-CH")]);

        let variants: Vec<_> = record.symbol_variants.keys().cloned().collect();
        assert_eq!(variants, vec!["EUR".to_string()]);

        let locales: Vec<&str> = record.symbol_variants["EUR"]
            .iter()
            .map(LocaleId::as_str)
            .collect();
        assert_eq!(locales, vec!["de-CH", "de-LI"]);
    }

    #[test]
    fn test_explicit_only() {
        let xxx = Currency::new("XXX", -1, 999).unwrap();
        assert!(CurrencyRecord::new(xxx, "XXX").is_explicit_only());
        assert!(!CurrencyRecord::new(eur(), "€")
            .with_locales([LocaleId::new("de-DE")])
            .is_explicit_only());
    }
}
