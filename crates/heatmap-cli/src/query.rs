//! # Query Subcommand
//!
//! ```bash
//! heatmap query niger --data data.json
//! heatmap query all --pretty
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use heatmap_core::DatasetStore;

/// Arguments for the query subcommand.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Country name (case-insensitive), or `all` for every record.
    pub term: String,

    /// Dataset file.
    #[arg(long, default_value = "data.json")]
    pub data: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the query subcommand, writing a JSON array to `out`.
///
/// Exits `0` whether or not anything matched.
pub fn run_query(args: &QueryArgs, out: &mut impl Write) -> Result<u8> {
    let dataset = DatasetStore::load(&args.data)
        .with_context(|| format!("loading dataset {}", args.data.display()))?;

    let records = dataset.query(&args.term);
    tracing::info!(term = %args.term, matched = records.len(), "query complete");

    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &records)?;
    } else {
        serde_json::to_writer(&mut *out, &records)?;
    }
    writeln!(out)?;
    Ok(0)
}
