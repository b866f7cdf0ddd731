//! Currency table generator binary
//!
//! Usage:
//!   currency-table-generator --locales 'de*' --currencies XXX
//!   currency-table-generator --config config/generator.toml --verify

use anyhow::Result;
use clap::Parser;
use currency_aggregator::DefaultSymbolScope;
use currency_config::GeneratorConfig;
use currency_table_generator::{generate, verify_table};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "currency-table-generator")]
#[command(about = "Generate the binary currency table and its trace")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog of currencies and locales
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Locale selector, e.g. 'de*,en-NZ'
    #[arg(short = 'L', long)]
    locales: Option<String>,

    /// Currency code selector, e.g. 'XXX,XAU'
    #[arg(short = 'C', long)]
    currencies: Option<String>,

    /// Locales that vote for the default symbol (input, catalog)
    #[arg(long)]
    scope: Option<DefaultSymbolScope>,

    /// Binary table output
    #[arg(long)]
    data_out: Option<PathBuf>,

    /// Trace output
    #[arg(long, conflicts_with = "no_trace")]
    trace_out: Option<PathBuf>,

    /// Skip writing the trace
    #[arg(long)]
    no_trace: bool,

    /// Decode the written table before exiting
    #[arg(long)]
    verify: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Override `config` with the flags given, expanding `$VAR` and `~` in paths
    fn apply(self, mut config: GeneratorConfig) -> Result<GeneratorConfig> {
        if let Some(catalog) = self.catalog {
            config.catalog = catalog;
        }
        if let Some(locales) = self.locales {
            config.locales = locales;
        }
        if let Some(currencies) = self.currencies {
            config.currencies = currencies;
        }
        if let Some(scope) = self.scope {
            config.default_symbol_scope = scope;
        }
        if let Some(data) = self.data_out {
            config.output.data = data;
        }
        if let Some(trace) = self.trace_out {
            config.output.trace = Some(trace);
        }
        if self.no_trace {
            config.output.trace = None;
        }
        config.expand_env_vars()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = GeneratorConfig::load(args.config.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {:#}", e);
        e
    })?;
    let verify = args.verify;
    let config = args.apply(config)?;
    config.validate()?;

    info!(
        catalog = %config.catalog.display(),
        scope = %config.default_symbol_scope,
        "Generating currency table"
    );
    let summary = generate(&config)?;

    if verify {
        let records = verify_table(&config.output.data)?;
        if records != summary.record_count {
            anyhow::bail!(
                "Verification read {} records, expected {}",
                records,
                summary.record_count
            );
        }
    }

    println!("{summary}");
    Ok(())
}

/// `RUST_LOG` directives win over `--log-level`; unknown levels fall back to info
fn init_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
