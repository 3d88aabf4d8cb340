//! Binary search handler.

use axum::extract::{Query, State};
use axum::Json;
use campus_trace::BinarySearchReport;

use crate::schema::queries::SearchParams;
use crate::state::AppState;

/// Binary-searches location names and returns the full step trace.
///
/// `GET /search?query=<name>`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<BinarySearchReport> {
    let report = state.service.search(&params.query);
    tracing::info!(
        query = %params.query,
        found = report.found,
        steps = report.steps.len(),
        "binary search"
    );
    Json(report)
}
