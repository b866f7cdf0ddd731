//! # Commented Writer - Data and Trace in Lockstep
//!
//! ## Purpose
//!
//! Every logical field of the table is written twice: once as bytes to the
//! data sink and once as a `key=value` line to the comment sink. Routing both
//! writes through one call per field keeps the trace from drifting away from
//! the binary stream.
//!
//! ## Wire Encoding
//!
//! - **Integers**: 32-bit signed, big-endian
//! - **Strings**: unsigned 16-bit big-endian byte length, then UTF-8 bytes
//! - **Locale lists**: integer count followed by that many strings
//!
//! ## Trace Encoding
//!
//! ```text
//! // currencyCode=NZD
//! // locales=en-NZ
//! // $=en-NZ
//! //
//! ```

use crate::constants::{DEFAULT_COMMENT_PREFIX, LOCALE_SEPARATOR, MAX_STRING_BYTES};
use crate::error::{CodecError, CodecResult};
use byteorder::{BigEndian, WriteBytesExt};
use currency_types::{LocaleId, LocaleSet};
use std::io::Write;

pub struct CommentedWriter<D: Write, C: Write> {
    data: D,
    comments: C,
    prefix: String,
    bytes_written: usize,
    lines_written: usize,
}

impl<D: Write, C: Write> CommentedWriter<D, C> {
    pub fn new(data: D, comments: C) -> Self {
        Self {
            data,
            comments,
            prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            bytes_written: 0,
            lines_written: 0,
        }
    }

    /// Replace the `// ` written before every trace line
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn write_int(&mut self, key: &str, value: i32) -> CodecResult<()> {
        self.comment(key, value)?;
        self.int(value)
    }

    /// Write a collection size as an integer field
    pub fn write_count(&mut self, key: &str, count: usize) -> CodecResult<()> {
        let value = i32::try_from(count).map_err(|_| CodecError::count_overflow(key, count))?;
        self.write_int(key, value)
    }

    pub fn write_utf(&mut self, key: &str, value: &str) -> CodecResult<()> {
        self.comment(key, value)?;
        self.utf(key, value)
    }

    /// Count-prefixed locale list, traced as a single csv line
    pub fn write_locales(&mut self, key: &str, locales: &LocaleSet) -> CodecResult<()> {
        let csv = locales
            .iter()
            .map(LocaleId::as_str)
            .collect::<Vec<_>>()
            .join(LOCALE_SEPARATOR);
        self.comment(key, csv)?;

        let count = i32::try_from(locales.len())
            .map_err(|_| CodecError::count_overflow(key, locales.len()))?;
        self.int(count)?;
        for locale in locales {
            self.utf(key, locale.as_str())?;
        }
        Ok(())
    }

    /// Symbol string followed by its locale list, traced as `symbol=csv`
    pub fn write_symbol_locales(&mut self, symbol: &str, locales: &LocaleSet) -> CodecResult<()> {
        self.utf("symbol", symbol)?;
        self.write_locales(symbol, locales)
    }

    /// Prefix-only line separating records
    pub fn blank_line(&mut self) -> CodecResult<()> {
        writeln!(self.comments, "{}", self.prefix).map_err(CodecError::comment_sink)?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush both sinks and hand them back
    pub fn finish(mut self) -> CodecResult<(D, C)> {
        self.data.flush().map_err(CodecError::data_sink)?;
        self.comments.flush().map_err(CodecError::comment_sink)?;
        Ok((self.data, self.comments))
    }

    fn comment(&mut self, key: &str, value: impl std::fmt::Display) -> CodecResult<()> {
        writeln!(self.comments, "{}{}={}", self.prefix, key, value)
            .map_err(CodecError::comment_sink)?;
        self.lines_written += 1;
        Ok(())
    }

    fn int(&mut self, value: i32) -> CodecResult<()> {
        self.data
            .write_i32::<BigEndian>(value)
            .map_err(CodecError::data_sink)?;
        self.bytes_written += 4;
        Ok(())
    }

    fn utf(&mut self, field: &str, value: &str) -> CodecResult<()> {
        let bytes = value.as_bytes();
        if bytes.len() > MAX_STRING_BYTES {
            return Err(CodecError::string_too_long(
                field,
                bytes.len(),
                MAX_STRING_BYTES,
            ));
        }

        self.data
            .write_u16::<BigEndian>(bytes.len() as u16)
            .map_err(CodecError::data_sink)?;
        self.data.write_all(bytes).map_err(CodecError::data_sink)?;
        self.bytes_written += 2 + bytes.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish(writer: CommentedWriter<Vec<u8>, Vec<u8>>) -> (Vec<u8>, String) {
        let (data, comments) = writer.finish().unwrap();
        (data, String::from_utf8(comments).unwrap())
    }

    #[test]
    fn test_int_is_big_endian_with_comment() {
        let mut writer = CommentedWriter::new(Vec::new(), Vec::new());
        writer.write_int("numericCode", 554).unwrap();

        let (data, comments) = finish(writer);
        assert_eq!(data, vec![0x00, 0x00, 0x02, 0x2A]);
        assert_eq!(comments, "// numericCode=554\n");
    }

    #[test]
    fn test_negative_int() {
        let mut writer = CommentedWriter::new(Vec::new(), Vec::new());
        writer.write_int("defaultFractionDigits", -1).unwrap();

        let (data, comments) = finish(writer);
        assert_eq!(data, vec![0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(comments, "// defaultFractionDigits=-1\n");
    }

    #[test]
    fn test_utf_length_counts_bytes_not_chars() {
        let mut writer = CommentedWriter::new(Vec::new(), Vec::new());
        writer.write_utf("defaultSymbol", "€").unwrap();

        let (data, _) = finish(writer);
        assert_eq!(data, vec![0x00, 0x03, 0xE2, 0x82, 0xAC]);
    }

    #[test]
    fn test_locales_single_comment_line() {
        let locales: LocaleSet = [LocaleId::new("de-LI"), LocaleId::new("de-CH")].into();
        let mut writer = CommentedWriter::new(Vec::new(), Vec::new()).with_comment_prefix("# ");
        writer.write_locales("locales", &locales).unwrap();
        assert_eq!(writer.lines_written(), 1);

        let (data, comments) = finish(writer);
        assert_eq!(comments, "# locales=de-CH,de-LI\n");
        assert_eq!(&data[..4], &[0, 0, 0, 2]);
        assert_eq!(&data[4..6], &[0, 5]);
        assert_eq!(&data[6..11], b"de-CH");
        assert_eq!(data.len(), 4 + 7 + 7);
    }

    #[test]
    fn test_empty_locales() {
        let mut writer = CommentedWriter::new(Vec::new(), Vec::new());
        writer.write_locales("locales", &LocaleSet::new()).unwrap();

        let (data, comments) = finish(writer);
        assert_eq!(data, vec![0, 0, 0, 0]);
        assert_eq!(comments, "// locales=\n");
    }

    #[test]
    fn test_string_too_long_rejected() {
        let long = "x".repeat(MAX_STRING_BYTES + 1);
        let mut writer = CommentedWriter::new(Vec::new(), Vec::new());
        let err = writer.write_utf("defaultSymbol", &long).unwrap_err();
        assert!(matches!(err, CodecError::StringTooLong { len, .. } if len == MAX_STRING_BYTES + 1));
    }

    #[test]
    fn test_blank_line_is_prefix_only() {
        let mut writer = CommentedWriter::new(Vec::new(), Vec::new());
        writer.blank_line().unwrap();
        let (_, comments) = finish(writer);
        assert_eq!(comments, "// \n");
    }
}
