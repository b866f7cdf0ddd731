//! Aggregation options

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which locales vote when picking a currency's default symbol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultSymbolScope {
    /// Only the locales being generated
    #[default]
    Input,
    /// Every locale the catalog knows, so the default does not change with the selection
    Catalog,
}

impl FromStr for DefaultSymbolScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "input" => Ok(Self::Input),
            "catalog" => Ok(Self::Catalog),
            other => Err(format!(
                "unknown default symbol scope {other:?}: expected \"input\" or \"catalog\""
            )),
        }
    }
}

impl fmt::Display for DefaultSymbolScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Catalog => f.write_str("catalog"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateOptions {
    #[serde(default)]
    pub default_symbol_scope: DefaultSymbolScope,
}

impl AggregateOptions {
    pub fn with_default_symbol_scope(mut self, scope: DefaultSymbolScope) -> Self {
        self.default_symbol_scope = scope;
        self
    }
}
