//! Quicksort-by-distance handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use campus_core::LocationId;
use campus_trace::QuickSortReport;

use crate::error::ApiError;
use crate::schema::queries::SortParams;
use crate::state::AppState;

/// Sorts locations by distance from a reference location and returns the
/// full step trace.
///
/// `GET /sort?reference=<id>`
pub async fn sort(
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> Result<Json<QuickSortReport>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let reference = LocationId(params.reference);

    let report = state.service.sort(reference).inspect_err(|err| {
        tracing::warn!(
            %reference,
            locations = state.service.campus().len(),
            error = %err,
            "quicksort rejected"
        );
    })?;

    tracing::info!(%reference, steps = report.steps.len(), "quicksort");
    Ok(Json(report))
}
