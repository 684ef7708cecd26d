//! # Record
//!
//! One entry of the dataset: a JSON object kept exactly as it appeared in the
//! source document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The one field the service interprets.
pub const COUNTRY_FIELD: &str = "Country";

/// A single dataset entry.
///
/// Serializes back to the identical JSON object it was parsed from. Key order
/// is preserved (`serde_json` is built with `preserve_order`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap an existing JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The `Country` field, if present and a string.
    pub fn country(&self) -> Option<&str> {
        self.0.get(COUNTRY_FIELD).and_then(Value::as_str)
    }

    /// Look up any field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Borrow the underlying object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the record, returning the underlying object.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
