//! # heatmap-api — Binary Entry Point
//!
//! Loads the dataset, then starts the Axum HTTP server.
//! Binds to configurable host and port (default `0.0.0.0:8080`).

use heatmap_api::middleware::metrics::{install_recorder, DATASET_RECORDS};
use heatmap_api::{telemetry, AppConfig, AppState};
use heatmap_core::DatasetStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration decides the log format, so read it first and report
    // any error once logging is up.
    let config = AppConfig::from_env();
    telemetry::init(config.as_ref().is_ok_and(|c| c.debug));
    let config = config.map_err(|e| {
        tracing::error!("Invalid configuration: {e}");
        e
    })?;

    // The dataset must be in memory before the listener binds.
    let dataset = DatasetStore::load(&config.data_path).map_err(|e| {
        tracing::error!("Dataset load failed: {e}");
        e
    })?;

    let metrics = if config.metrics_enabled {
        let handle = install_recorder().map_err(|e| {
            tracing::error!("Failed to install Prometheus recorder: {e}");
            e
        })?;
        metrics::gauge!(DATASET_RECORDS).set(dataset.len() as f64);
        Some(handle)
    } else {
        None
    };

    let addr = config.bind_addr();
    if config.debug {
        tracing::warn!("Development mode enabled");
    }
    let state = AppState::with_config(dataset, config, metrics);
    let app = heatmap_api::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Heatmap API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Heatmap API stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
