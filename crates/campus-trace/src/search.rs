//! Binary search over location names with step recording.
//!
//! The engine copies the input, sorts the copy by name (byte-wise, stable, so
//! duplicate names keep their input order), then runs an iterative binary
//! search. Every midpoint check and every halving decision is recorded.

use std::cmp::Ordering;

use campus_core::{CampusGraph, Location};

use crate::recorder::{Trace, TraceRecorder};
use crate::step::{SearchAction, SearchState, StepRecord};

pub type SearchStep = StepRecord<SearchAction, SearchState>;
pub type SearchTrace = Trace<SearchAction, SearchState>;

/// Everything a binary search run produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub query: String,
    /// Index into `sorted` of the matching location.
    pub found: Option<usize>,
    /// The full dataset in the order the search saw it.
    pub sorted: Vec<Location>,
    pub trace: SearchTrace,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }

    /// The matching location, if any.
    pub fn result(&self) -> Option<&Location> {
        self.found.map(|idx| &self.sorted[idx])
    }
}

/// Searches every location of `campus` for `query`.
pub fn search_campus(campus: &CampusGraph, query: &str) -> SearchOutcome {
    search(&campus.locations(), query)
}

/// Runs a traced binary search for `query` over `nodes`.
///
/// Empty input and unmatched queries are not errors; they produce a
/// `found: None` outcome with the trace of the path taken.
pub fn search(nodes: &[Location], query: &str) -> SearchOutcome {
    let mut sorted = nodes.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut recorder = TraceRecorder::new();
    let mut left: i64 = 0;
    let mut right: i64 = sorted.len() as i64 - 1;
    let mut found = None;

    recorder.record(
        SearchAction::Start,
        format!("Array is sorted alphabetically. Searching for: {query}"),
        SearchState {
            left,
            right,
            mid: None,
            compare: None,
            found: false,
        },
    );

    while left <= right {
        let mid = (left + (right - left) / 2) as usize;
        let candidate = sorted[mid].name.as_str();

        recorder.record(
            SearchAction::CheckMiddle,
            format!("Range: [{left}, {right}]. Midpoint: {mid} ({candidate})"),
            SearchState {
                left,
                right,
                mid: Some(mid),
                compare: Some(mid),
                found: false,
            },
        );

        match query.cmp(candidate) {
            Ordering::Equal => {
                recorder.record(
                    SearchAction::Found,
                    format!("'{query}' matches '{candidate}' at index {mid}"),
                    SearchState {
                        left,
                        right,
                        mid: Some(mid),
                        compare: Some(mid),
                        found: true,
                    },
                );
                found = Some(mid);
                break;
            }
            Ordering::Less => {
                right = mid as i64 - 1;
                recorder.record(
                    SearchAction::SearchLeft,
                    format!(
                        "'{query}' < '{candidate}'. Discard right half and search left."
                    ),
                    SearchState {
                        left,
                        right,
                        mid: Some(mid),
                        compare: Some(mid),
                        found: false,
                    },
                );
            }
            Ordering::Greater => {
                left = mid as i64 + 1;
                recorder.record(
                    SearchAction::SearchRight,
                    format!(
                        "'{query}' > '{candidate}'. Discard left half and search right."
                    ),
                    SearchState {
                        left,
                        right,
                        mid: Some(mid),
                        compare: Some(mid),
                        found: false,
                    },
                );
            }
        }
    }

    if found.is_none() {
        recorder.record(
            SearchAction::NotFound,
            format!("Search completed. '{query}' not found in the campus."),
            SearchState {
                left,
                right,
                mid: None,
                compare: None,
                found: false,
            },
        );
    }

    tracing::debug!(
        query,
        found = found.is_some(),
        steps = recorder.len(),
        "binary search finished"
    );

    SearchOutcome {
        query: query.to_string(),
        found,
        sorted,
        trace: recorder.finish(),
    }
}
