//! # Error Types
//!
//! Loading is the only fallible operation in this crate. Queries are total.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a [`DatasetStore`](crate::DatasetStore) from its source
/// document. Always fatal at startup.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The document could not be opened or read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of objects.
    #[error("malformed dataset {origin}: {source}")]
    Parse {
        /// Path of the document, or `<memory>` for in-memory input.
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    /// Build a parse error for a document that did not come from disk.
    pub(crate) fn in_memory(source: serde_json::Error) -> Self {
        Self::Parse {
            origin: "<memory>".to_string(),
            source,
        }
    }
}
