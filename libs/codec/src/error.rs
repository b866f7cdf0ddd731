//! Codec errors for currency table encoding and decoding
//!
//! Encoding can only fail when a sink fails or a value does not fit the
//! format. Decoding fails fast on the first count or length that disagrees
//! with the bytes that follow, and reports the offset where it happened.

use currency_types::CurrencyCodeError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Writing to the data or comment sink failed
    #[error("Sink write failed ({sink}): {source}")]
    Io {
        sink: &'static str,
        #[source]
        source: io::Error,
    },

    /// String does not fit the 16-bit length prefix
    #[error("String too long for field {field}: {len} bytes exceeds limit {max}")]
    StringTooLong {
        field: String,
        len: usize,
        max: usize,
    },

    /// Collection does not fit a 32-bit signed count
    #[error("Count overflow for field {field}: {count} entries")]
    CountOverflow { field: String, count: usize },

    /// Stream ended before the declared data
    #[error("Unexpected end of stream: need {need} bytes at offset {offset}, got {got} (context: {context})")]
    UnexpectedEof {
        need: usize,
        got: usize,
        offset: usize,
        context: String,
    },

    /// A count field was negative
    #[error("Negative count {count} for {context} at offset {offset}")]
    NegativeCount {
        count: i32,
        offset: usize,
        context: String,
    },

    #[error("Invalid UTF-8 in {context} at offset {offset}")]
    InvalidUtf8 { offset: usize, context: String },

    #[error("Invalid currency code at offset {offset}: {source}")]
    InvalidCurrencyCode {
        offset: usize,
        #[source]
        source: CurrencyCodeError,
    },

    /// Bytes remain after the last declared record
    #[error("Trailing bytes: {remaining} bytes left after last record at offset {offset}")]
    TrailingBytes { remaining: usize, offset: usize },
}

impl CodecError {
    pub fn data_sink(source: io::Error) -> Self {
        Self::Io {
            sink: "data",
            source,
        }
    }

    pub fn comment_sink(source: io::Error) -> Self {
        Self::Io {
            sink: "comments",
            source,
        }
    }

    pub fn string_too_long(field: impl Into<String>, len: usize, max: usize) -> Self {
        Self::StringTooLong {
            field: field.into(),
            len,
            max,
        }
    }

    pub fn count_overflow(field: impl Into<String>, count: usize) -> Self {
        Self::CountOverflow {
            field: field.into(),
            count,
        }
    }

    pub fn unexpected_eof(
        need: usize,
        got: usize,
        offset: usize,
        context: impl Into<String>,
    ) -> Self {
        Self::UnexpectedEof {
            need,
            got,
            offset,
            context: context.into(),
        }
    }

    pub fn negative_count(count: i32, offset: usize, context: impl Into<String>) -> Self {
        Self::NegativeCount {
            count,
            offset,
            context: context.into(),
        }
    }

    pub fn invalid_utf8(offset: usize, context: impl Into<String>) -> Self {
        Self::InvalidUtf8 {
            offset,
            context: context.into(),
        }
    }

    /// True when the stream was cut short, the loader's end-of-stream case
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
