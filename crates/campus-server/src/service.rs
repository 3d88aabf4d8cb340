//! CampusService: the single coordinator between HTTP handlers and the
//! campus graph and trace engines.
//!
//! The campus graph is read-only for the lifetime of the service, so the
//! service is shared across handlers without a lock. Every search or sort
//! runs on its own working copy of the locations.

use campus_core::{CampusGraph, LocationId};
use campus_trace::{BinarySearchReport, QuickSortReport};

use crate::error::ApiError;
use crate::schema::campus::{LocationsResponse, WalkwayView};

pub struct CampusService {
    campus: CampusGraph,
}

impl CampusService {
    pub fn new(campus: CampusGraph) -> Self {
        CampusService { campus }
    }

    pub fn campus(&self) -> &CampusGraph {
        &self.campus
    }

    /// Lists every location and walkway.
    pub fn locations(&self) -> LocationsResponse {
        LocationsResponse {
            locations: self.campus.locations(),
            walkways: self
                .campus
                .walkways()
                .into_iter()
                .map(|(from, to, length)| WalkwayView {
                    from: from.0,
                    to: to.0,
                    length,
                })
                .collect(),
        }
    }

    /// Binary-searches the campus for a location named `query`.
    pub fn search(&self, query: &str) -> BinarySearchReport {
        campus_trace::search_campus(&self.campus, query).into()
    }

    /// Quicksorts the campus by distance from `reference`.
    pub fn sort(&self, reference: LocationId) -> Result<QuickSortReport, ApiError> {
        let outcome = campus_trace::sort_campus(&self.campus, reference)?;
        Ok(outcome.into())
    }
}
