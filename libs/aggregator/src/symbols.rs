//! Symbol maps and default symbol selection
//!
//! A symbol map groups locales by how they display one currency. The default
//! symbol is the one rendered by the most locales; ties go to the
//! lexicographically smallest symbol so the result never depends on
//! iteration order.

use currency_types::{Currency, LocaleCatalog, LocaleId, SymbolVariants};
use tracing::debug;

/// Group `locales` by the symbol each renders for `currency`
///
/// Locales that cannot render the currency, or render it as an empty string,
/// are left out.
pub fn symbol_map<'a, C, I>(catalog: &C, currency: &Currency, locales: I) -> SymbolVariants
where
    C: LocaleCatalog + ?Sized,
    I: IntoIterator<Item = &'a LocaleId>,
{
    locales
        .into_iter()
        .filter_map(|locale| match catalog.resolve_symbol(currency, locale) {
            Ok(symbol) if !symbol.is_empty() => Some((symbol, locale)),
            Ok(_) => None,
            Err(err) => {
                debug!(currency = %currency, %locale, error = %err, "Skipping symbol lookup");
                None
            }
        })
        .fold(SymbolVariants::new(), |mut symbols, (symbol, locale)| {
            symbols.entry(symbol).or_default().insert(locale.clone());
            symbols
        })
}

/// The symbol rendered by the most locales, smallest symbol on ties
pub fn most_popular_symbol(symbols: &SymbolVariants) -> Option<&str> {
    // BTreeMap iterates keys ascending, so a strict `>` keeps the smallest tied key
    symbols
        .iter()
        .fold(None::<(&str, usize)>, |best, (symbol, locales)| match best {
            Some((_, count)) if count >= locales.len() => best,
            _ => Some((symbol.as_str(), locales.len())),
        })
        .map(|(symbol, _)| symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use currency_types::LocaleSet;

    fn locales(tags: &[&str]) -> LocaleSet {
        tags.iter().map(|tag| LocaleId::new(*tag)).collect()
    }

    #[test]
    fn test_most_popular_wins() {
        let mut symbols = SymbolVariants::new();
        symbols.insert("$".to_string(), locales(&["en-NZ"]));
        symbols.insert("NZ$".to_string(), locales(&["en-AU", "en-GB", "en-US"]));

        assert_eq!(most_popular_symbol(&symbols), Some("NZ$"));
    }

    #[test]
    fn test_tie_picks_smallest_symbol() {
        let mut symbols = SymbolVariants::new();
        symbols.insert("US$".to_string(), locales(&["en-AU", "en-NZ"]));
        symbols.insert("$".to_string(), locales(&["en-US", "es-US"]));
        symbols.insert("USD".to_string(), locales(&["de-DE", "fr-FR"]));

        assert_eq!(most_popular_symbol(&symbols), Some("$"));
    }

    #[test]
    fn test_empty_map_has_no_default() {
        assert_eq!(most_popular_symbol(&SymbolVariants::new()), None);
    }
}
