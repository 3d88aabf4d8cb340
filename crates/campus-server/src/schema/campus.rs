//! Campus listing response types.

use campus_core::Location;
use serde::Serialize;

/// Response for `GET /locations`.
#[derive(Debug, Clone, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
    pub walkways: Vec<WalkwayView>,
}

/// A walkway between two location ids.
#[derive(Debug, Clone, Serialize)]
pub struct WalkwayView {
    pub from: u32,
    pub to: u32,
    pub length: f64,
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
