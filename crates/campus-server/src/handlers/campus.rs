//! Campus listing and health handlers.

use axum::extract::State;
use axum::Json;

use crate::schema::campus::{HealthResponse, LocationsResponse};
use crate::state::AppState;

/// Liveness probe.
///
/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Returns every location and walkway on the campus.
///
/// `GET /locations`
pub async fn list_locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    Json(state.service.locations())
}
