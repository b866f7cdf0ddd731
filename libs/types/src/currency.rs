//! ISO 4217 currency identity and numeric attributes
//!
//! A [`Currency`] is identified by its three-letter [`CurrencyCode`]. The
//! numeric attributes are carried verbatim from the catalog: fraction digits
//! may be `-1` (no minor unit, e.g. `XXX`) and the numeric code may be `0`
//! for codes that have none.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rejected currency code text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurrencyCodeError {
    #[error("Currency code {code:?} must be exactly 3 characters, got {len}")]
    WrongLength { code: String, len: usize },

    #[error("Currency code {code:?} must contain only ASCII uppercase letters")]
    InvalidCharacters { code: String },
}

/// Three uppercase ASCII letters, e.g. `NZD`
///
/// Ordering is plain ordinal string comparison, which is the order the
/// encoded table uses for its records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub const LEN: usize = 3;

    pub fn new(code: &str) -> Result<Self, CurrencyCodeError> {
        let len = code.chars().count();
        if len != Self::LEN {
            return Err(CurrencyCodeError::WrongLength {
                code: code.to_string(),
                len,
            });
        }
        if !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(CurrencyCodeError::InvalidCharacters {
                code: code.to_string(),
            });
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A currency and the numeric attributes written into every table record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Currency {
    pub code: CurrencyCode,
    /// `-1` when the currency has no minor unit
    pub default_fraction_digits: i32,
    /// ISO 4217 numeric code, `0` when the code has none
    pub numeric_code: i32,
}

impl Currency {
    pub fn new(
        code: &str,
        default_fraction_digits: i32,
        numeric_code: i32,
    ) -> Result<Self, CurrencyCodeError> {
        Ok(Self {
            code: CurrencyCode::new(code)?,
            default_fraction_digits,
            numeric_code,
        })
    }

    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// True when the currency has no minor unit
    pub fn has_no_minor_unit(&self) -> bool {
        self.default_fraction_digits < 0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
