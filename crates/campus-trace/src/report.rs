//! Response shapes consumed by the visualizer front end.
//!
//! [`BinarySearchReport`] and [`QuickSortReport`] are built from finished
//! outcomes by plain `From` conversions. Nothing here re-runs or checks the
//! algorithms. Field names are a wire contract with the front end; absent
//! indices are rendered as `-1`.

use campus_core::Location;
use serde::Serialize;

use crate::search::{SearchOutcome, SearchStep};
use crate::sort::{RankedLocation, SortOutcome, SortStep};

/// Marker for "no index" in step payloads.
pub const NO_INDEX: i64 = -1;

fn index_or_none(idx: Option<usize>) -> i64 {
    idx.map_or(NO_INDEX, |i| i as i64)
}

// ---------------------------------------------------------------------------
// Binary search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinarySearchReport {
    pub algorithm: &'static str,
    pub query: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Location>,
    pub sorted_array: Vec<SortedEntry>,
    pub steps: Vec<SearchStepView>,
    pub complexity: SearchComplexity,
}

/// One entry of the alphabetically sorted array.
#[derive(Debug, Clone, Serialize)]
pub struct SortedEntry {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStepView {
    pub step: usize,
    pub action: &'static str,
    pub explanation: String,
    pub left: i64,
    pub right: i64,
    pub mid: i64,
    pub compare_node: i64,
    pub found: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchComplexity {
    pub time: &'static str,
    pub space: &'static str,
    pub description: &'static str,
}

impl From<&SearchStep> for SearchStepView {
    fn from(step: &SearchStep) -> Self {
        let state = step.state();
        SearchStepView {
            step: step.step(),
            action: step.action().label(),
            explanation: step.explanation().to_string(),
            left: state.left,
            right: state.right,
            mid: index_or_none(state.mid),
            compare_node: index_or_none(state.compare),
            found: state.found,
        }
    }
}

impl From<SearchOutcome> for BinarySearchReport {
    fn from(outcome: SearchOutcome) -> Self {
        let steps = outcome.trace.iter().map(SearchStepView::from).collect();
        let result = outcome.result().cloned();
        let sorted_array = outcome
            .sorted
            .iter()
            .map(|loc| SortedEntry {
                id: loc.id.0,
                name: loc.name.clone(),
            })
            .collect();

        BinarySearchReport {
            algorithm: "binary_search",
            found: outcome.found.is_some(),
            query: outcome.query,
            result,
            sorted_array,
            steps,
            complexity: SearchComplexity {
                time: "O(log n)",
                space: "O(1)",
                description: "Iterative binary search on sorted array",
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Quicksort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSortReport {
    pub algorithm: &'static str,
    pub reference_node: u32,
    pub reference_name: String,
    pub sorted_locations: Vec<RankedLocation>,
    pub steps: Vec<SortStepView>,
    pub complexity: SortComplexity,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortStepView {
    pub step: usize,
    pub action: &'static str,
    pub explanation: String,
    pub array: Vec<i64>,
    pub names: Vec<String>,
    pub pivot: i64,
    pub left: i64,
    pub right: i64,
    pub low: i64,
    pub high: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortComplexity {
    pub time_avg: &'static str,
    pub time_worst: &'static str,
    pub space: &'static str,
    pub description: &'static str,
}

impl From<&SortStep> for SortStepView {
    fn from(step: &SortStep) -> Self {
        let state = step.state();
        SortStepView {
            step: step.step(),
            action: step.action().label(),
            explanation: step.explanation().to_string(),
            array: state.distances.clone(),
            names: state.names.clone(),
            pivot: index_or_none(state.pivot),
            left: state.left.unwrap_or(NO_INDEX),
            right: index_or_none(state.right),
            low: state.low,
            high: state.high,
        }
    }
}

impl From<SortOutcome> for QuickSortReport {
    fn from(outcome: SortOutcome) -> Self {
        QuickSortReport {
            algorithm: "quicksort",
            reference_node: outcome.reference.0,
            steps: outcome.trace.iter().map(SortStepView::from).collect(),
            reference_name: outcome.reference_name,
            sorted_locations: outcome.sorted,
            complexity: SortComplexity {
                time_avg: "O(n log n)",
                time_worst: "O(n^2)",
                space: "O(log n)",
                description: "In-place Lomuto quicksort with last-element pivot",
            },
        }
    }
}
