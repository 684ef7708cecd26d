//! # heatmap-api — Axum HTTP Service for the Heatmap Dataset
//!
//! Serves a JSON dataset, loaded once at startup, filtered by country.
//!
//! ## API Surface
//!
//! | Path                       | Module              | Purpose                 |
//! |----------------------------|---------------------|-------------------------|
//! | `/`                        | [`routes::index`]   | Heatmap page            |
//! | `/static/*`                | [`routes::index`]   | Script and images       |
//! | `/get_data/{search_term}`  | [`routes::data`]    | Country-filtered records|
//! | `/openapi.json`            | [`openapi`]         | OpenAPI document        |
//! | `/health/*`, `/metrics`    | [`routes::health`]  | Probes and scrape       |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes and `/metrics` are mounted outside the traced, metered
/// routes.
pub fn app(state: AppState) -> Router {
    let with_metrics = state.config.metrics_enabled && state.metrics.is_some();

    let mut api = Router::new()
        .merge(routes::index::router(&state.config.static_dir))
        .merge(routes::data::router())
        .merge(openapi::router())
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::method_not_allowed);

    if with_metrics {
        api = api.layer(from_fn(middleware::metrics::metrics_middleware));
    }

    let api = api.layer(TraceLayer::new_for_http());

    Router::new()
        .merge(routes::health::router(with_metrics))
        .merge(api)
        .with_state(state)
}
