//! # Currency Table Parser
//!
//! ## Purpose
//!
//! Reads a table produced by [`crate::encoder`] back into records, the same
//! way the runtime loader does. Every count is trusted to describe exactly the
//! entries that follow: the parser fails fast with
//! [`CodecError::UnexpectedEof`] when the stream is shorter than declared and
//! with [`CodecError::TrailingBytes`] when bytes remain after the last record.

use crate::constants::{INT_BYTES, STRING_LENGTH_BYTES};
use crate::error::{CodecError, CodecResult};
use byteorder::{BigEndian, ByteOrder};
use currency_types::{Currency, CurrencyCode, CurrencyRecord, LocaleId, LocaleSet};

pub struct TableParser<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> TableParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Parse the whole table and require the stream to end exactly after it
    pub fn parse_table(mut self) -> CodecResult<Vec<CurrencyRecord>> {
        let count = self.read_count("recordCount")?;
        let mut records = Vec::with_capacity(count.min(1024));

        for _ in 0..count {
            records.push(self.parse_record()?);
        }

        if self.remaining() > 0 {
            return Err(CodecError::TrailingBytes {
                remaining: self.remaining(),
                offset: self.offset,
            });
        }
        Ok(records)
    }

    pub fn parse_record(&mut self) -> CodecResult<CurrencyRecord> {
        let code_offset = self.offset;
        let code = self.read_utf("currencyCode")?;
        let code = CurrencyCode::new(&code).map_err(|source| CodecError::InvalidCurrencyCode {
            offset: code_offset,
            source,
        })?;

        let currency = Currency {
            code,
            default_fraction_digits: self.read_int("defaultFractionDigits")?,
            numeric_code: self.read_int("numericCode")?,
        };
        let default_symbol = self.read_utf("defaultSymbol")?;
        let locales = self.read_locales("locales")?;

        let mut record = CurrencyRecord::new(currency, default_symbol).with_locales(locales);

        let symbol_count = self.read_count("symbolEntryCount")?;
        for _ in 0..symbol_count {
            let symbol = self.read_utf("symbol")?;
            let locales = self.read_locales("symbolLocales")?;
            record.symbol_variants.insert(symbol, locales);
        }

        Ok(record)
    }

    pub fn read_int(&mut self, context: &str) -> CodecResult<i32> {
        let bytes = self.take(INT_BYTES, context)?;
        Ok(BigEndian::read_i32(bytes))
    }

    pub fn read_utf(&mut self, context: &str) -> CodecResult<String> {
        let len = BigEndian::read_u16(self.take(STRING_LENGTH_BYTES, context)?) as usize;
        let start = self.offset;
        let bytes = self.take(len, context)?;
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| CodecError::invalid_utf8(start, context))
    }

    fn read_count(&mut self, context: &str) -> CodecResult<usize> {
        let offset = self.offset;
        let count = self.read_int(context)?;
        usize::try_from(count).map_err(|_| CodecError::negative_count(count, offset, context))
    }

    fn read_locales(&mut self, context: &str) -> CodecResult<LocaleSet> {
        let count = self.read_count(context)?;
        (0..count)
            .map(|_| self.read_utf(context).map(LocaleId::from))
            .collect()
    }

    fn take(&mut self, len: usize, context: &str) -> CodecResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(CodecError::unexpected_eof(
                len,
                self.remaining(),
                self.offset,
                context,
            ));
        }
        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }
}

/// Parse a complete table
pub fn decode(data: &[u8]) -> CodecResult<Vec<CurrencyRecord>> {
    TableParser::new(data).parse_table()
}
