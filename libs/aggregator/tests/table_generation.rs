//! # Currency Table Generation Tests
//!
//! End-to-end checks from catalog through aggregation to the encoded table:
//! - Known locale selections produce exact records, bytes and trace lines
//! - Locale-derived and explicit currencies never duplicate
//! - Encoded counts always match the entries that follow

use currency_aggregator::{
    aggregate, AggregateOptions, Aggregator, DefaultSymbolScope, TableCatalog,
};
use currency_codec::{decode, encode_to_vec};
use currency_types::{Currency, CurrencyRecord, LocaleCatalog, LocaleId, Selector};
use std::collections::BTreeSet;

const GERMAN_CATALOG: &str = r#"
[[currency]]
code = "CHF"
fraction_digits = 2
numeric_code = 756

[[currency]]
code = "EUR"
fraction_digits = 2
numeric_code = 978
symbol = "€"

[[currency]]
code = "NZD"
fraction_digits = 2
numeric_code = 554
symbol = "NZ$"

[[currency]]
code = "XXX"
fraction_digits = -1
numeric_code = 999

[[locale]]
tag = "de"
currency = "EUR"

[[locale]]
tag = "de-AT"
currency = "EUR"

[[locale]]
tag = "de-BE"
currency = "EUR"

[[locale]]
tag = "de-CH"
currency = "CHF"
[locale.symbols]
EUR = "EUR"

[[locale]]
tag = "de-DE"
currency = "EUR"

[[locale]]
tag = "de-LI"
currency = "CHF"
[locale.symbols]
EUR = "EUR"

[[locale]]
tag = "de-LU"
currency = "EUR"

[[locale]]
tag = "en-NZ"
currency = "NZD"
[locale.symbols]
NZD = "$"

[[locale]]
tag = "en-AU"
[locale.symbols]
NZD = "NZ$"

[[locale]]
tag = "en-GB"
"#;

fn catalog() -> TableCatalog {
    TableCatalog::from_toml_str(GERMAN_CATALOG).expect("fixture catalog parses")
}

fn locales(tags: &[&str]) -> BTreeSet<LocaleId> {
    tags.iter().map(|tag| LocaleId::canonical(tag)).collect()
}

fn tags(set: &BTreeSet<LocaleId>) -> Vec<&str> {
    set.iter().map(LocaleId::as_str).collect()
}

/// Hand-rolled table bytes for exact comparisons
#[derive(Default)]
struct Expected(Vec<u8>);

impl Expected {
    fn int(mut self, value: i32) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn utf(mut self, value: &str) -> Self {
        self.0.extend_from_slice(&(value.len() as u16).to_be_bytes());
        self.0.extend_from_slice(value.as_bytes());
        self
    }

    fn locales(self, tags: &[&str]) -> Self {
        tags.iter()
            .fold(self.int(tags.len() as i32), |expected, tag| expected.utf(tag))
    }
}

#[test]
fn test_german_locales() {
    let catalog = catalog();
    let selected = Selector::parse("DE*").select(catalog.all_locales());
    assert_eq!(
        tags(&selected),
        vec!["de", "de-AT", "de-BE", "de-CH", "de-DE", "de-LI", "de-LU"]
    );

    let records = aggregate(&catalog, &selected, Vec::<String>::new());
    assert_eq!(records.len(), 2);

    let chf = &records[0];
    assert_eq!(chf.code(), "CHF");
    assert_eq!(chf.default_symbol, "CHF");
    assert_eq!(tags(&chf.locales), vec!["de-CH", "de-LI"]);
    assert!(chf.symbol_variants.is_empty());

    let eur = &records[1];
    assert_eq!(eur.code(), "EUR");
    assert_eq!(eur.default_symbol, "€");
    assert_eq!(tags(&eur.locales), vec!["de", "de-AT", "de-BE", "de-DE", "de-LU"]);
    assert_eq!(eur.symbol_variants.len(), 1);
    assert_eq!(tags(&eur.symbol_variants["EUR"]), vec!["de-CH", "de-LI"]);

    let table = encode_to_vec(&records).unwrap();
    let expected = Expected::default()
        .int(2)
        .utf("CHF")
        .int(2)
        .int(756)
        .utf("CHF")
        .locales(&["de-CH", "de-LI"])
        .int(0)
        .utf("EUR")
        .int(2)
        .int(978)
        .utf("€")
        .locales(&["de", "de-AT", "de-BE", "de-DE", "de-LU"])
        .int(1)
        .utf("EUR")
        .locales(&["de-CH", "de-LI"]);
    assert_eq!(table.data, expected.0);

    let trace: Vec<&str> = table.trace.iter().map(String::as_str).collect();
    assert_eq!(
        trace,
        vec![
            "// recordCount=2",
            "// currencyCode=CHF",
            "// defaultFractionDigits=2",
            "// numericCode=756",
            "// defaultSymbol=CHF",
            "// locales=de-CH,de-LI",
            "// symbolCount=0",
            "// ",
            "// currencyCode=EUR",
            "// defaultFractionDigits=2",
            "// numericCode=978",
            "// defaultSymbol=€",
            "// locales=de,de-AT,de-BE,de-DE,de-LU",
            "// symbolCount=1",
            "// EUR=de-CH,de-LI",
            "// ",
        ]
    );
}

#[test]
fn test_new_zealand_with_explicit_xxx() {
    let catalog = catalog();
    let records = aggregate(&catalog, &locales(&["EN-NZ"]), ["XXX"]);

    assert_eq!(records.len(), 2);
    let nzd = &records[0];
    assert_eq!(nzd.code(), "NZD");
    assert_eq!(nzd.currency.default_fraction_digits, 2);
    assert_eq!(nzd.currency.numeric_code, 554);
    assert_eq!(nzd.default_symbol, "$");
    assert_eq!(tags(&nzd.locales), vec!["en-NZ"]);
    assert!(nzd.symbol_variants.is_empty());

    let xxx = &records[1];
    assert_eq!(xxx.code(), "XXX");
    assert_eq!(xxx.currency.default_fraction_digits, -1);
    assert_eq!(xxx.currency.numeric_code, 999);
    assert_eq!(xxx.default_symbol, "XXX");
    assert!(xxx.locales.is_empty());

    let table = encode_to_vec(&records).unwrap();
    assert_eq!(decode(&table.data).unwrap(), records);
}

#[test]
fn test_new_zealand_catalog_scope_default() {
    let catalog = catalog();
    let records = Aggregator::new(&catalog)
        .with_options(AggregateOptions::default().with_default_symbol_scope(DefaultSymbolScope::Catalog))
        .aggregate(&locales(&["en-NZ"]), ["XXX"]);

    let nzd = &records[0];
    assert_eq!(nzd.default_symbol, "NZ$");
    assert_eq!(tags(&nzd.symbol_variants["$"]), vec!["en-NZ"]);
}

#[test]
fn test_duplicate_currency_emitted_once() {
    let catalog = catalog();
    let records = aggregate(&catalog, &locales(&["en-NZ"]), ["NZD"]);

    assert_eq!(records.len(), 1);
    assert_eq!(tags(&records[0].locales), vec!["en-NZ"]);

    let table = encode_to_vec(&records).unwrap();
    assert_eq!(&table.data[..4], &[0, 0, 0, 1]);
}

#[test]
fn test_empty_selection() {
    let records = aggregate(&catalog(), &BTreeSet::new(), Vec::<String>::new());
    assert!(records.is_empty());

    let table = encode_to_vec(&records).unwrap();
    assert_eq!(table.data, vec![0, 0, 0, 0]);
    assert_eq!(table.trace, vec!["// recordCount=0".to_string()]);
}

#[test]
fn test_every_native_locale_resolves_to_its_record() {
    let catalog = catalog();
    let all = catalog.all_locales();
    let records = aggregate(&catalog, &all, Selector::parse("*").select(catalog.all_currency_codes()));

    let codes: Vec<&str> = records.iter().map(CurrencyRecord::code).collect();
    assert_eq!(codes, vec!["CHF", "EUR", "NZD", "XXX"]);

    for record in &records {
        for locale in &record.locales {
            let currency: Currency = catalog.resolve_locale_currency(locale).unwrap();
            assert_eq!(currency, record.currency);
        }
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    const CODES: [&str; 5] = ["AUD", "CHF", "EUR", "NZD", "XXX"];
    const TAGS: [&str; 8] = ["de", "de-CH", "en-AU", "en-NZ", "fr-CH", "fr-FR", "it-CH", "mi"];
    const SYMBOLS: [&str; 6] = ["$", "CHF", "€", "A$", "Fr.", ""];

    type LocaleSpec = (Option<usize>, Vec<(usize, usize)>);

    fn build_catalog(specs: &[LocaleSpec]) -> TableCatalog {
        let catalog = CODES.iter().enumerate().fold(TableCatalog::new(), |catalog, (i, code)| {
            let currency = Currency::new(code, 2, i as i32 + 1).unwrap();
            catalog.with_currency(currency, None).unwrap()
        });

        TAGS.iter().zip(specs).fold(catalog, |catalog, (tag, (currency, symbols))| {
            let symbols: Vec<(&str, &str)> = symbols
                .iter()
                .map(|(code, symbol)| (CODES[*code], SYMBOLS[*symbol]))
                .collect();
            catalog
                .with_locale(tag, currency.map(|i| CODES[i]), &symbols)
                .unwrap()
        })
    }

    fn locale_spec() -> impl Strategy<Value = LocaleSpec> {
        (
            proptest::option::of(0..CODES.len()),
            proptest::collection::vec((0..CODES.len(), 0..SYMBOLS.len()), 0..4),
        )
    }

    fn scenario() -> impl Strategy<Value = (Vec<LocaleSpec>, Vec<&'static str>, Vec<&'static str>, bool)> {
        (
            proptest::collection::vec(locale_spec(), TAGS.len()),
            proptest::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len()),
            proptest::sample::subsequence(vec!["AUD", "EUR", "XXX", "YYY"], 0..=4),
            any::<bool>(),
        )
    }

    proptest! {
        #[test]
        fn prop_table_invariants((specs, input, explicit, catalog_scope) in scenario()) {
            let catalog = build_catalog(&specs);
            let input = locales(&input);
            let scope = if catalog_scope { DefaultSymbolScope::Catalog } else { DefaultSymbolScope::Input };
            let records = Aggregator::new(&catalog)
                .with_options(AggregateOptions::default().with_default_symbol_scope(scope))
                .aggregate(&input, &explicit);

            // codes unique and ascending
            for pair in records.windows(2) {
                prop_assert!(pair[0].code() < pair[1].code());
            }

            for record in &records {
                prop_assert!(!record.symbol_variants.contains_key(&record.default_symbol));
                prop_assert!(!record.default_symbol.is_empty());
                prop_assert!(record.locales.is_subset(&input));
                for locales in record.symbol_variants.values() {
                    prop_assert!(!locales.is_empty());
                    prop_assert!(locales.is_subset(&input));
                }
            }

            // locale-derived occurrence wins over the explicit list
            for record in &records {
                let native: BTreeSet<LocaleId> = input
                    .iter()
                    .filter(|locale| {
                        catalog
                            .resolve_locale_currency(locale)
                            .map(|currency| currency.code == record.currency.code)
                            .unwrap_or(false)
                    })
                    .cloned()
                    .collect();
                prop_assert_eq!(&record.locales, &native);
                if native.is_empty() {
                    prop_assert!(explicit.iter().any(|code| *code == record.code()));
                    prop_assert_eq!(&record.default_symbol, &record.currency.code.to_string());
                }
            }

            // the encoded stream decodes back exactly, with nothing left over
            let table = encode_to_vec(&records).unwrap();
            prop_assert_eq!(decode(&table.data).unwrap(), records);
        }

        #[test]
        fn prop_truncated_table_never_decodes((specs, input, explicit, _) in scenario(), cut in 1usize..64) {
            let catalog = build_catalog(&specs);
            let records = aggregate(&catalog, &locales(&input), &explicit);
            let data = encode_to_vec(&records).unwrap().data;

            let keep = data.len().saturating_sub(cut);
            prop_assert!(decode(&data[..keep]).is_err());
        }
    }
}
