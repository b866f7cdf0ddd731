//! Selector expressions for choosing locales and currency codes
//!
//! A selector is a comma separated list of patterns. Each pattern is either an
//! exact value or a prefix ending in `*`; a bare `*` selects everything.
//! Matching ignores ASCII case, so `DE*` picks `de`, `de-CH` and `de-LI`.
//! An empty expression selects nothing.

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pattern {
    All,
    Exact(String),
    Prefix(String),
}

impl Pattern {
    fn parse(text: &str) -> Self {
        match text.strip_suffix('*') {
            Some("") => Pattern::All,
            Some(prefix) => Pattern::Prefix(prefix.to_ascii_lowercase()),
            None => Pattern::Exact(text.to_ascii_lowercase()),
        }
    }

    fn matches(&self, folded: &str) -> bool {
        match self {
            Pattern::All => true,
            Pattern::Exact(value) => folded == value,
            Pattern::Prefix(prefix) => folded.starts_with(prefix.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    expression: String,
    patterns: Vec<Pattern>,
}

impl Selector {
    pub fn parse(expression: &str) -> Self {
        let patterns = expression
            .split(',')
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
            .map(Pattern::parse)
            .collect();

        Self {
            expression: expression.trim().to_string(),
            patterns,
        }
    }

    /// Selector that matches nothing
    pub fn none() -> Self {
        Self::parse("")
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        let folded = candidate.to_ascii_lowercase();
        self.patterns.iter().any(|pattern| pattern.matches(&folded))
    }

    /// Keep the candidates this selector matches, sorted and deduplicated
    pub fn select<T, I>(&self, candidates: I) -> BTreeSet<T>
    where
        T: AsRef<str> + Ord,
        I: IntoIterator<Item = T>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.matches(candidate.as_ref()))
            .collect()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
