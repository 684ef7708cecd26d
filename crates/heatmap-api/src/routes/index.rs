//! # Index Page and Static Assets
//!
//! `GET /` serves the heatmap page compiled into the binary. The page pulls
//! its script, and any per-country images, from `/static`, which is backed by
//! the configured static directory on disk.

use std::path::Path;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// The heatmap page.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Build the index router, serving `/static/*` from `static_dir`.
pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .nest_service("/static", ServeDir::new(static_dir))
}

/// GET / — The heatmap page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
