//! # Currency Table Configuration
//!
//! Configuration loading and defaults for the currency table generator.
//!
//! ## Sources
//!
//! Later sources override earlier ones:
//! - Built-in defaults ([`defaults`])
//! - TOML config file (optional)
//! - `CURRENCY_TABLE_*` environment variables
//! - Command line flags (applied by the binary)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use currency_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::load(None)?;
//! println!("catalog: {}", config.catalog.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod defaults;
pub mod generator_config;

pub use generator_config::{GeneratorConfig, OutputConfig};
