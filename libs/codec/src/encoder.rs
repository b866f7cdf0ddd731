//! # Currency Table Encoder
//!
//! ## Purpose
//!
//! Walks the aggregated [`CurrencyRecord`] list once, writing the binary
//! table and its comment trace in lockstep through [`CommentedWriter`].
//!
//! ## Layout
//!
//! ```text
//! recordCount: i32
//! repeat recordCount:
//!   currencyCode: utf
//!   defaultFractionDigits: i32
//!   numericCode: i32
//!   defaultSymbol: utf
//!   localeCount: i32, localeCount × utf
//!   symbolEntryCount: i32
//!   repeat symbolEntryCount:
//!     symbol: utf
//!     symbolLocaleCount: i32, symbolLocaleCount × utf
//! ```
//!
//! Records are written in the order given; the aggregator has already sorted
//! them by currency code.

use crate::constants::keys;
use crate::error::CodecResult;
use crate::writer::CommentedWriter;
use currency_types::CurrencyRecord;
use std::io::Write;
use tracing::debug;

/// Output of [`encode_to_vec`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTable {
    pub data: Vec<u8>,
    /// Trace lines without trailing newlines
    pub trace: Vec<String>,
}

pub struct TableEncoder<D: Write, C: Write> {
    writer: CommentedWriter<D, C>,
}

impl<D: Write, C: Write> TableEncoder<D, C> {
    pub fn new(data: D, comments: C) -> Self {
        Self {
            writer: CommentedWriter::new(data, comments),
        }
    }

    pub fn with_comment_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            writer: self.writer.with_comment_prefix(prefix),
        }
    }

    /// Write the whole table, flush both sinks and return them
    pub fn encode(mut self, records: &[CurrencyRecord]) -> CodecResult<(D, C)> {
        self.writer.write_count(keys::RECORD_COUNT, records.len())?;

        for record in records {
            self.write_record(record)?;
        }

        debug!(
            records = records.len(),
            bytes = self.writer.bytes_written(),
            lines = self.writer.lines_written(),
            "Encoded currency table"
        );
        self.writer.finish()
    }

    fn write_record(&mut self, record: &CurrencyRecord) -> CodecResult<()> {
        let currency = &record.currency;
        self.writer.write_utf(keys::CURRENCY_CODE, currency.code())?;
        self.writer
            .write_int(keys::DEFAULT_FRACTION_DIGITS, currency.default_fraction_digits)?;
        self.writer.write_int(keys::NUMERIC_CODE, currency.numeric_code)?;
        self.writer
            .write_utf(keys::DEFAULT_SYMBOL, &record.default_symbol)?;

        self.writer.write_locales(keys::LOCALES, &record.locales)?;

        self.writer
            .write_count(keys::SYMBOL_COUNT, record.symbol_variants.len())?;
        for (symbol, locales) in &record.symbol_variants {
            self.writer.write_symbol_locales(symbol, locales)?;
        }

        self.writer.blank_line()
    }
}

/// Encode into memory, returning the bytes and the trace as separate lines
pub fn encode_to_vec(records: &[CurrencyRecord]) -> CodecResult<EncodedTable> {
    let (data, comments) = TableEncoder::new(Vec::new(), Vec::new()).encode(records)?;
    let trace = String::from_utf8_lossy(&comments)
        .lines()
        .map(str::to_string)
        .collect();
    Ok(EncodedTable { data, trace })
}
