//! # Custom Extractors
//!
//! Path-segment extraction that never rejects. A segment the router matched
//! but could not decode (invalid percent-encoding, non-UTF-8 bytes) is
//! treated as a term that matches nothing, so clients always get a JSON array.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use heatmap_core::SearchTerm;

/// Normalize an extracted search term, mapping decode failures to `None`.
///
/// Handlers should use:
/// ```ignore
/// async fn handler(term: Result<Path<String>, PathRejection>) -> ... {
///     let term = extract_search_term(term);
///     // None selects no records
/// }
/// ```
pub fn extract_search_term(result: Result<Path<String>, PathRejection>) -> Option<SearchTerm> {
    match result {
        Ok(Path(raw)) => Some(SearchTerm::new(&raw)),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "undecodable search term");
            None
        }
    }
}
