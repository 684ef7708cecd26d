//! # Structured Logging
//!
//! `RUST_LOG` takes precedence. Otherwise the filter is `info`, or `debug`
//! in development mode. Production output is one JSON object per line;
//! development output is the human-readable formatter.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Call once, from `main`.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if debug {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    }
}
