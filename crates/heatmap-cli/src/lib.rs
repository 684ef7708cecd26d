//! # heatmap-cli — Dataset Command-Line Interface
//!
//! Runs the same query the server answers on `/get_data/{term}`, straight
//! against a dataset file, and reports what a dataset contains.
//!
//! ## Subcommands
//!
//! - `query` — Print the records matching a search term as JSON
//! - `inspect` — Print record and country counts for a dataset
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `heatmap-core` — no query logic here.
//! - Handlers write to a caller-supplied writer and return an exit code.

pub mod inspect;
pub mod query;
