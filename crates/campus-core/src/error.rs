//! Core error types for campus-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! failure modes of building and querying a campus graph.

use crate::id::LocationId;
use thiserror::Error;

/// Core errors produced by the campus-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A location id was not found in the graph.
    #[error("location not found: LocationId({id})", id = id.0)]
    LocationNotFound { id: LocationId },

    /// A location with the same name already exists.
    #[error("duplicate location name: '{name}'")]
    DuplicateLocationName { name: String },

    /// A walkway failed validation.
    #[error("invalid walkway: {reason}")]
    InvalidWalkway { reason: String },

    /// A dataset could not be read or parsed.
    #[error("invalid dataset: {reason}")]
    Dataset { reason: String },
}
