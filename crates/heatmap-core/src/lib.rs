//! # heatmap-core — Dataset Store and Country Query
//!
//! The data layer behind the heatmap service. A JSON document holding an
//! array of records is loaded once at startup into a [`DatasetStore`]; every
//! request afterwards reads it through [`DatasetStore::query`].
//!
//! ## Key Design Principles
//!
//! 1. **Records are opaque.** Only the `Country` field is interpreted. Every
//!    other field is passed through verbatim, in source key order.
//!
//! 2. **Immutable after load.** The store exposes no mutation. It wraps an
//!    `Arc<[Record]>`, so clones share one allocation and concurrent readers
//!    need no locking.
//!
//! 3. **Queries never fail.** A record without a string `Country` simply
//!    does not match. An unmatched term yields an empty result.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `heatmap-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod dataset;
pub mod error;
pub mod query;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use dataset::{DatasetStore, DatasetSummary};
pub use error::DatasetError;
pub use query::{SearchTerm, ALL};
pub use record::{Record, COUNTRY_FIELD};
