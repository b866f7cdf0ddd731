//! Generator Configuration Module
//!
//! Loads generator settings from an optional TOML file with environment
//! variable overrides.

use crate::defaults;
use anyhow::{bail, Context, Result};
use config_rs::{Config, Environment, File, FileFormat};
use currency_aggregator::{AggregateOptions, DefaultSymbolScope};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main generator configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// TOML catalog of currencies and locales
    pub catalog: PathBuf,

    /// Selector over catalog locales, e.g. `de*,en-NZ`
    pub locales: String,

    /// Selector over catalog currency codes added regardless of locales
    pub currencies: String,

    pub default_symbol_scope: DefaultSymbolScope,

    pub output: OutputConfig,
}

/// Where the table and its trace are written
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub data: PathBuf,
    /// Written by default; set to an empty path (`trace = ""` or
    /// `CURRENCY_TABLE_OUTPUT__TRACE=`) to skip the trace
    pub trace: Option<PathBuf>,
    pub comment_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(defaults::CATALOG_PATH),
            locales: defaults::LOCALE_SELECTOR.to_string(),
            currencies: defaults::CURRENCY_SELECTOR.to_string(),
            default_symbol_scope: DefaultSymbolScope::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from(defaults::DATA_OUTPUT),
            trace: Some(PathBuf::from(defaults::TRACE_OUTPUT)),
            comment_prefix: defaults::COMMENT_PREFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a file with `CURRENCY_TABLE_*` overrides
    ///
    /// A missing file is fine when no path was given explicitly; the
    /// defaults and environment still apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(path, defaults::ENV_PREFIX)
    }

    pub fn load_with_env_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let (file, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(defaults::CONFIG_PATH), false),
        };

        if file.exists() {
            info!("Loading generator config: {:?}", file);
        } else if required {
            bail!("Config file not found: {}", file.display());
        } else {
            debug!("No config file at {:?}, using defaults", file);
        }

        let config = Config::builder()
            .add_source(File::from(file).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator(defaults::ENV_SEPARATOR),
            )
            .build()
            .context("Failed to build configuration")?;

        let mut config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.output.drop_empty_trace();
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Expand `$VAR` and `~` in every path
    pub fn expand_env_vars(&mut self) -> Result<()> {
        self.catalog = expand_path(&self.catalog).context("Failed to expand catalog path")?;
        self.output.data =
            expand_path(&self.output.data).context("Failed to expand data output path")?;
        if let Some(trace) = &self.output.trace {
            self.output.trace =
                Some(expand_path(trace).context("Failed to expand trace output path")?);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.as_os_str().is_empty() {
            bail!("catalog path must not be empty");
        }
        if self.output.data.as_os_str().is_empty() {
            bail!("output.data path must not be empty");
        }
        if self.output.comment_prefix.contains(['\n', '\r']) {
            bail!("output.comment_prefix must be a single line");
        }
        if self.output.trace.as_deref() == Some(self.output.data.as_path()) {
            bail!("output.trace and output.data must be different files");
        }
        Ok(())
    }

    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions::default().with_default_symbol_scope(self.default_symbol_scope)
    }
}

impl OutputConfig {
    /// An empty trace path means no trace
    fn drop_empty_trace(&mut self) {
        self.trace = self.trace.take().filter(|trace| !trace.as_os_str().is_empty());
    }
}

fn expand_path(path: &Path) -> Result<PathBuf> {
    let text = path.to_string_lossy();
    let expanded = shellexpand::full(&text)?;
    Ok(PathBuf::from(expanded.into_owned()))
}
