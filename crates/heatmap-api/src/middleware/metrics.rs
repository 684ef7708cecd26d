//! # Prometheus Metrics
//!
//! Request metrics recorded through the `metrics` facade. The binary installs
//! a Prometheus recorder at startup with [`install_recorder`]; without one
//! (tests, or metrics disabled) the macros are no-ops.
//!
//! Histogram samples are buffered by the recorder until upkeep folds them
//! into the exposed summaries, so an installed recorder always runs with an
//! upkeep task.

use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Total HTTP requests, labelled by method, route and status.
pub const HTTP_REQUESTS_TOTAL: &str = "heatmap_http_requests_total";
/// Request latency in seconds, labelled by method and route.
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "heatmap_http_request_duration_seconds";
/// Number of records in the loaded dataset.
pub const DATASET_RECORDS: &str = "heatmap_dataset_records";

/// How often buffered histogram samples are drained.
pub const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Install the global Prometheus recorder and start its upkeep task.
///
/// Must be called from within a Tokio runtime. Fails if a global recorder
/// is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    spawn_upkeep(handle.clone(), UPKEEP_INTERVAL);
    tracing::debug!(interval = ?UPKEEP_INTERVAL, "Prometheus recorder installed");
    Ok(handle)
}

/// Run [`PrometheusHandle::run_upkeep`] every `period` until the runtime
/// shuts down or the returned task is aborted.
pub fn spawn_upkeep(handle: PrometheusHandle, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            handle.run_upkeep();
        }
    })
}

/// Middleware that counts requests and records their latency.
///
/// The route label is the matched route template (e.g.
/// `/get_data/{search_term}`), never the raw path, so label cardinality
/// stays bounded.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    metrics::counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "method" => method,
        "route" => route
    )
    .record(started.elapsed().as_secs_f64());

    response
}
