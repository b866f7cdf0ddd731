//! # Currency Table Generator
//!
//! Loads a catalog, selects locales and explicit currency codes, aggregates
//! them into currency records and writes the binary table plus its trace.
//!
//! Output files are written to a temporary file beside the target and renamed
//! into place only after the encoder has flushed, so a failed run never leaves
//! a half-written table behind. The trace is renamed before the table.

use anyhow::{Context, Result};
use currency_aggregator::{Aggregator, TableCatalog};
use currency_codec::{decode, TableEncoder};
use currency_config::{GeneratorConfig, OutputConfig};
use currency_types::{CurrencyCode, CurrencyRecord, LocaleCatalog, LocaleId, Selector};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Locales and explicit currency codes picked from a catalog
#[derive(Debug, Clone)]
pub struct Selection {
    pub locale_selector: Selector,
    pub currency_selector: Selector,
    pub locales: BTreeSet<LocaleId>,
    pub currency_codes: BTreeSet<CurrencyCode>,
}

impl Selection {
    pub fn from_catalog<C: LocaleCatalog + ?Sized>(
        catalog: &C,
        locales: &str,
        currencies: &str,
    ) -> Self {
        let locale_selector = Selector::parse(locales);
        let currency_selector = Selector::parse(currencies);

        let selection = Self {
            locales: locale_selector.select(catalog.all_locales()),
            currency_codes: currency_selector.select(catalog.all_currency_codes()),
            locale_selector,
            currency_selector,
        };

        if selection.locales.is_empty() && !selection.locale_selector.is_empty() {
            warn!(selector = %selection.locale_selector, "Locale selector matched nothing");
        }
        if selection.currency_codes.is_empty() && !selection.currency_selector.is_empty() {
            warn!(selector = %selection.currency_selector, "Currency selector matched nothing");
        }
        selection
    }
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub locale_count: usize,
    pub locale_selector: String,
    pub currency_count: usize,
    pub currency_selector: String,
    pub record_count: usize,
    pub bytes_written: usize,
}

impl GenerationSummary {
    fn new(selection: &Selection, records: &[CurrencyRecord], bytes_written: usize) -> Self {
        Self {
            locale_count: selection.locales.len(),
            locale_selector: selection.locale_selector.to_string(),
            currency_count: selection.currency_codes.len(),
            currency_selector: selection.currency_selector.to_string(),
            record_count: records.len(),
            bytes_written,
        }
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Locale(s) ({}), {} Currency(s) ({})",
            self.locale_count, self.locale_selector, self.currency_count, self.currency_selector
        )
    }
}

/// Run the whole pipeline described by `config`
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let catalog = TableCatalog::load(&config.catalog)
        .with_context(|| format!("Failed to load catalog {}", config.catalog.display()))?;
    info!(
        currencies = catalog.currency_count(),
        locales = catalog.locale_count(),
        "Catalog loaded"
    );

    generate_from_catalog(&catalog, config)
}

pub fn generate_from_catalog<C: LocaleCatalog + ?Sized>(
    catalog: &C,
    config: &GeneratorConfig,
) -> Result<GenerationSummary> {
    let selection = Selection::from_catalog(catalog, &config.locales, &config.currencies);
    debug!(
        locales = selection.locales.len(),
        currencies = selection.currency_codes.len(),
        "Selection complete"
    );

    let records = Aggregator::new(catalog)
        .with_options(config.aggregate_options())
        .aggregate(&selection.locales, &selection.currency_codes);

    let bytes_written = write_table(&records, &config.output)?;
    let summary = GenerationSummary::new(&selection, &records, bytes_written);
    info!(
        records = summary.record_count,
        bytes = summary.bytes_written,
        "Generated {}",
        summary
    );
    Ok(summary)
}

/// Encode `records` into the configured data file and optional trace file
pub fn write_table(records: &[CurrencyRecord], output: &OutputConfig) -> Result<usize> {
    let data = staging_file(&output.data)?;
    let trace = output.trace.as_deref().map(staging_file).transpose()?;

    let comments: Box<dyn Write> = match &trace {
        Some(file) => Box::new(BufWriter::new(
            file.reopen().context("Failed to open trace file")?,
        )),
        None => Box::new(io::sink()),
    };

    let (data_writer, comments) = TableEncoder::new(BufWriter::new(data.reopen()?), comments)
        .with_comment_prefix(output.comment_prefix.as_str())
        .encode(records)
        .context("Failed to encode currency table")?;
    drop(comments);

    let data_file = data_writer
        .into_inner()
        .map_err(|err| err.into_error())
        .context("Failed to flush data file")?;
    let bytes_written = data_file.metadata()?.len() as usize;
    drop(data_file);

    // Trace lands first; the table is only renamed once its trace is in place
    if let (Some(file), Some(path)) = (trace, output.trace.as_deref()) {
        file.persist(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    data.persist(&output.data)
        .with_context(|| format!("Failed to write {}", output.data.display()))?;

    info!(path = %output.data.display(), bytes = bytes_written, "Wrote currency table");
    Ok(bytes_written)
}

/// Read a table back and check it decodes exactly, returning its record count
pub fn verify_table(path: &Path) -> Result<usize> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let records =
        decode(&data).with_context(|| format!("Table {} failed verification", path.display()))?;
    info!(path = %path.display(), records = records.len(), "Verified currency table");
    Ok(records.len())
}

fn staging_file(target: &Path) -> Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))
}
