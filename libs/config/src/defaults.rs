//! Generator defaults
//!
//! Values used when neither the config file, the environment nor the command
//! line says otherwise.

/// Config file read when `--config` is not given
pub const CONFIG_PATH: &str = "config/generator.toml";

/// Environment override prefix, e.g. `CURRENCY_TABLE_LOCALES=de*`
pub const ENV_PREFIX: &str = "CURRENCY_TABLE";

/// Separator between nested keys in environment overrides, e.g. `CURRENCY_TABLE_OUTPUT__DATA`
pub const ENV_SEPARATOR: &str = "__";

pub const CATALOG_PATH: &str = "data/catalog.toml";

/// Every locale in the catalog
pub const LOCALE_SELECTOR: &str = "*";

/// The "no currency" test code, always useful as a fallback at runtime
pub const CURRENCY_SELECTOR: &str = "XXX";

pub const DATA_OUTPUT: &str = "target/currency-table.bin";

pub const TRACE_OUTPUT: &str = "target/currency-table.txt";

pub const COMMENT_PREFIX: &str = "// ";
