//! # Country Query
//!
//! A search term is lowercased once, then either selects the whole dataset
//! (the literal `all`) or matches records whose lowercased `Country` equals
//! it exactly. No prefix, substring or fuzzy matching.

use crate::record::Record;

/// Search term that selects every record.
pub const ALL: &str = "all";

/// A normalized search term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalize a raw term taken from the request path.
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// Whether this term selects the whole dataset.
    pub fn is_all(&self) -> bool {
        self.0 == ALL
    }

    /// Whether `record` belongs in the result for this term.
    ///
    /// Records without a string `Country` only match `all`.
    pub fn matches(&self, record: &Record) -> bool {
        self.is_all()
            || record
                .country()
                .is_some_and(|country| country.to_lowercase() == self.0)
    }

    /// The lowercased term.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
