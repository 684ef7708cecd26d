//! # Dataset Query API
//!
//! ## Endpoints
//!
//! - `GET /get_data/{search_term}` — records whose `Country` equals the term
//!   case-insensitively, or every record for `all`.
//!
//! The response is always `200` with a JSON array. Unknown countries and
//! undecodable terms produce `[]`.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use heatmap_core::Record;
use serde::Serialize;
use utoipa::ToSchema;

use crate::extractors::extract_search_term;
use crate::state::AppState;

/// A dataset record as served.
///
/// Records are passed through verbatim from the source document; only
/// `Country` is interpreted. Any other fields present in the source appear
/// unchanged.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DatasetRecord {
    /// Country name, matched case-insensitively by the search term.
    ///
    /// May be missing or hold a non-string value. Such records never match
    /// a country term and are returned only for `all`.
    #[schema(example = "Niger")]
    pub country: Option<String>,
}

/// Build the dataset router.
pub fn router() -> Router<AppState> {
    Router::new().route("/get_data/{search_term}", get(get_data))
}

/// GET /get_data/{search_term} — Filter the dataset by country.
#[utoipa::path(
    get,
    path = "/get_data/{search_term}",
    params(
        ("search_term" = String, Path, description = "Country name (case-insensitive), or `all` for the full dataset"),
    ),
    responses(
        (status = 200, description = "Matching records in dataset order; empty when nothing matches", body = [DatasetRecord]),
    ),
    tag = "data"
)]
pub async fn get_data(
    State(state): State<AppState>,
    search_term: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(term) = extract_search_term(search_term) else {
        return Json(Vec::<Record>::new()).into_response();
    };

    let records = state.dataset.select(&term);
    tracing::debug!(term = %term, matched = records.len(), "dataset query");
    Json(records).into_response()
}
