//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The dataset is loaded before the state is built and never changes
//! afterwards. Cloning the state clones `Arc`s only.

use std::sync::Arc;

use heatmap_core::DatasetStore;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded dataset.
    pub dataset: DatasetStore,
    /// Server configuration.
    pub config: Arc<AppConfig>,
    /// Prometheus recorder handle, when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("records", &self.dataset.len())
            .field("source", &self.dataset.source())
            .field("config", &self.config)
            .field("metrics", &self.metrics.as_ref().map(|_| "[installed]"))
            .finish()
    }
}

impl AppState {
    /// State with default configuration and no metrics recorder.
    pub fn new(dataset: DatasetStore) -> Self {
        Self::with_config(dataset, AppConfig::default(), None)
    }

    /// State with the given configuration and optional metrics handle.
    pub fn with_config(
        dataset: DatasetStore,
        config: AppConfig,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            dataset,
            config: Arc::new(config),
            metrics,
        }
    }
}
