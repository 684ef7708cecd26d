//! # Health Probes and Metrics Scrape
//!
//! Mounted outside the traced API routes so probes and scrapes do not
//! inflate request metrics.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the health router. `/metrics` is mounted only when `with_metrics`.
pub fn router(with_metrics: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));
    if with_metrics {
        router.route("/metrics", get(prometheus_metrics))
    } else {
        router
    }
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe.
///
/// The dataset is loaded before the listener binds, so a running server is
/// always ready to serve.
async fn readiness() -> &'static str {
    "ready"
}

/// GET /metrics — Prometheus text exposition.
async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}
