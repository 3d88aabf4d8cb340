//! Application state shared by all handlers.
//!
//! [`AppState`] holds the [`CampusService`] behind an `Arc` with no lock: the
//! campus graph is never mutated after start-up, and each request builds its
//! own engine working state.

use std::sync::Arc;

use campus_core::{CampusDataset, CampusGraph, CoreError};

use crate::service::CampusService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CampusService>,
}

impl AppState {
    pub fn new(campus: CampusGraph) -> Self {
        AppState {
            service: Arc::new(CampusService::new(campus)),
        }
    }

    /// State backed by the built-in sample campus (for testing).
    pub fn sample() -> Result<Self, CoreError> {
        let campus = CampusGraph::from_dataset(&CampusDataset::sample())?;
        Ok(Self::new(campus))
    }
}
