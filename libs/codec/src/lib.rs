//! # Currency Table Codec
//!
//! ## Purpose
//!
//! The "Rules" layer for the generated currency table:
//! - Binary table encoding (big-endian integers, length-prefixed UTF-8 strings)
//! - A comment trace written in lockstep with every binary field
//! - The matching parser, used to verify generated tables
//!
//! ## Architecture Role
//!
//! ```text
//! libs/aggregator → [codec] → data file + trace file
//!       ↑              ↓
//! CurrencyRecord   TableEncoder / TableParser
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Locale or currency lookups (belongs in libs/aggregator)
//! - Deciding where output files live (belongs in services/generator)

pub mod constants;
pub mod encoder;
pub mod error;
pub mod parser;
pub mod writer;

pub use constants::*;
pub use encoder::{encode_to_vec, EncodedTable, TableEncoder};
pub use error::{CodecError, CodecResult};
pub use parser::{decode, TableParser};
pub use writer::CommentedWriter;
