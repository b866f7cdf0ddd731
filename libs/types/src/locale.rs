//! Locale identifiers
//!
//! A [`LocaleId`] is an opaque language tag such as `en-NZ`. Equality and
//! ordering are exact string comparison. [`LocaleId::canonical`] normalises
//! user-typed tags (`EN_nz` → `en-NZ`) before they enter the pipeline.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    /// Wrap a tag as-is, without canonicalisation
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Normalise subtag case the way language tags are conventionally written
    ///
    /// - first subtag (language): lowercase
    /// - 4 letter subtag (script): title case
    /// - 2 letter or 3 digit subtag (region): uppercase
    /// - anything else (variants, extensions): lowercase
    ///
    /// `_` is accepted as a separator and rewritten to `-`.
    pub fn canonical(tag: &str) -> Self {
        let canonical = tag
            .trim()
            .split(['-', '_'])
            .filter(|subtag| !subtag.is_empty())
            .enumerate()
            .map(|(index, subtag)| canonical_subtag(index, subtag))
            .collect::<Vec<_>>()
            .join("-");
        Self(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language subtag, e.g. `en` for `en-NZ`
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }
}

fn canonical_subtag(index: usize, subtag: &str) -> String {
    if index == 0 {
        return subtag.to_ascii_lowercase();
    }

    let is_alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
    let is_digit = subtag.bytes().all(|b| b.is_ascii_digit());

    match subtag.len() {
        4 if is_alpha => {
            let mut chars = subtag.chars();
            let first = chars.next().map(|c| c.to_ascii_uppercase());
            first
                .into_iter()
                .chain(chars.map(|c| c.to_ascii_lowercase()))
                .collect()
        }
        2 if is_alpha => subtag.to_ascii_uppercase(),
        3 if is_digit => subtag.to_string(),
        _ => subtag.to_ascii_lowercase(),
    }
}

impl From<&str> for LocaleId {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LocaleId {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
