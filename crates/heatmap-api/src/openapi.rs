//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented data routes into an OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the data API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Heatmap Data API",
        version = "0.1.0",
        description = "Country-filtered access to the heatmap dataset.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(crate::routes::data::get_data),
    components(schemas(
        crate::routes::data::DatasetRecord,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "data", description = "Dataset query API"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_documents_get_data() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/get_data/{search_term}"));
    }

    #[test]
    fn spec_serializes_with_title() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(json["info"]["title"], "Heatmap Data API");
        assert!(json["components"]["schemas"]["DatasetRecord"].is_object());
    }

    #[test]
    fn dataset_record_country_is_optional() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schema = &json["components"]["schemas"]["DatasetRecord"];
        assert!(schema["properties"]["Country"].is_object());
        let required = schema["required"].as_array().cloned().unwrap_or_default();
        assert!(!required.iter().any(|field| field == "Country"), "got: {schema}");
    }
}
