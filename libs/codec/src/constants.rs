//! # Table Format Constants
//!
//! Values the counterpart loader relies on. Changing any of them changes the
//! wire format.

/// Strings are prefixed with an unsigned 16-bit byte length
pub const MAX_STRING_BYTES: usize = u16::MAX as usize;

/// Width of every integer field, big-endian signed
pub const INT_BYTES: usize = 4;

/// Width of the string length prefix
pub const STRING_LENGTH_BYTES: usize = 2;

/// Prefix written before every trace line
pub const DEFAULT_COMMENT_PREFIX: &str = "// ";

/// Separator between locales on a single trace line
pub const LOCALE_SEPARATOR: &str = ",";

/// Trace keys, one per written field
pub mod keys {
    pub const RECORD_COUNT: &str = "recordCount";
    pub const CURRENCY_CODE: &str = "currencyCode";
    pub const DEFAULT_FRACTION_DIGITS: &str = "defaultFractionDigits";
    pub const NUMERIC_CODE: &str = "numericCode";
    pub const DEFAULT_SYMBOL: &str = "defaultSymbol";
    pub const LOCALES: &str = "locales";
    pub const SYMBOL_COUNT: &str = "symbolCount";
}
