//! # Inspect Subcommand
//!
//! Loads a dataset and prints its summary, as a table or as JSON.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use heatmap_core::DatasetStore;

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Dataset file.
    #[arg(long, default_value = "data.json")]
    pub data: PathBuf,

    /// Emit the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the inspect subcommand.
pub fn run_inspect(args: &InspectArgs, out: &mut impl Write) -> Result<u8> {
    let dataset = DatasetStore::load(&args.data)
        .with_context(|| format!("loading dataset {}", args.data.display()))?;
    let summary = dataset.summary();

    if args.json {
        serde_json::to_writer(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Dataset: {}", args.data.display())?;
        writeln!(out, "  records:          {}", summary.records)?;
        writeln!(out, "  countries:        {}", summary.countries)?;
        writeln!(out, "  without Country:  {}", summary.without_country)?;
    }
    Ok(0)
}
