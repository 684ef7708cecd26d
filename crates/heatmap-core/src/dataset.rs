//! # Dataset Store
//!
//! Holds the records loaded from the source document for the lifetime of the
//! process. Construction is the only time the document is read. The store
//! has no mutating methods, so a cloned handle can be shared across request
//! handlers without synchronization.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::error::DatasetError;
use crate::query::SearchTerm;
use crate::record::Record;

/// Immutable, ordered, in-memory dataset.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Arc<[Record]>,
    source: Option<PathBuf>,
}

/// Shape of a loaded dataset, reported at startup and by `heatmap inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Total number of records.
    pub records: usize,
    /// Distinct countries, compared case-insensitively.
    pub countries: usize,
    /// Records whose `Country` is absent or not a string.
    pub without_country: usize,
}

impl DatasetStore {
    /// Read and parse the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<Record> =
            serde_json::from_slice(&bytes).map_err(|source| DatasetError::Parse {
                origin: path.display().to_string(),
                source,
            })?;

        let store = Self {
            records: records.into(),
            source: Some(path.to_path_buf()),
        };
        let summary = store.summary();
        tracing::info!(
            path = %path.display(),
            records = summary.records,
            countries = summary.countries,
            "dataset loaded"
        );
        if summary.without_country > 0 {
            tracing::warn!(
                count = summary.without_country,
                "records without a string Country field will only appear in the full listing"
            );
        }
        Ok(store)
    }

    /// Parse an in-memory document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let records: Vec<Record> =
            serde_json::from_slice(bytes).map_err(DatasetError::in_memory)?;
        Ok(Self::from_records(records))
    }

    /// Wrap records that are already parsed.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
            source: None,
        }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path the dataset was loaded from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Records selected by `search_term`, in source order.
    ///
    /// `all` (any case) returns every record. Any other term returns the
    /// records whose `Country`, lowercased, equals the lowercased term. An
    /// empty result is not an error.
    pub fn query(&self, search_term: &str) -> Vec<&Record> {
        self.select(&SearchTerm::new(search_term))
    }

    /// Like [`query`](Self::query) for an already-normalized term.
    pub fn select(&self, term: &SearchTerm) -> Vec<&Record> {
        if term.is_all() {
            return self.records.iter().collect();
        }
        self.records.iter().filter(|r| term.matches(r)).collect()
    }

    /// Count records and distinct countries.
    pub fn summary(&self) -> DatasetSummary {
        let mut countries = HashSet::new();
        let mut without_country = 0;
        for record in self.records.iter() {
            match record.country() {
                Some(country) => {
                    countries.insert(country.to_lowercase());
                }
                None => without_country += 1,
            }
        }
        DatasetSummary {
            records: self.records.len(),
            countries: countries.len(),
            without_country,
        }
    }
}
