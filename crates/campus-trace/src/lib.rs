//! Step-traced search and sort engines for the campus visualizer.
//!
//! Each engine invocation runs one algorithm to completion and returns its
//! result together with a [`Trace`](recorder::Trace): an ordered, immutable
//! log of every decision the algorithm made, with enough state in each step
//! for a client to replay the run one frame at a time.
//!
//! - [`search::search`] sorts locations by name and binary-searches a query.
//! - [`sort::sort_by_distance`] quicksorts locations by distance from a
//!   reference location.
//! - [`report`] turns outcomes into the JSON shapes the front end consumes.
//!
//! Engines keep no state between calls; concurrent invocations share only
//! the read-only input slice.

pub mod error;
pub mod recorder;
pub mod report;
pub mod search;
pub mod sort;
pub mod step;

pub use error::TraceError;
pub use recorder::{Trace, TraceRecorder};
pub use report::{BinarySearchReport, QuickSortReport};
pub use search::{search, search_campus, SearchOutcome};
pub use sort::{sort_by_distance, sort_campus, RankedLocation, SortOutcome};
pub use step::{SearchAction, SearchState, SortAction, SortState, StepRecord};
