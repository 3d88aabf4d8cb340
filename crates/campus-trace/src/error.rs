//! Error types for the trace engines.

use campus_core::LocationId;
use thiserror::Error;

/// Errors produced before an engine starts recording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// The quicksort reference id does not name a location in the dataset.
    #[error("invalid reference location {id}: campus has {len} location(s)")]
    InvalidReference { id: LocationId, len: usize },
}
