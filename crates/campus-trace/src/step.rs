//! Step records: immutable snapshots of one instant of algorithm execution.
//!
//! A [`StepRecord`] pairs an action tag and a human-readable explanation with
//! an algorithm-specific state payload. Payloads own their data outright
//! (`Vec<i64>`, `Vec<String>`), so a record can never observe later changes
//! to the engine's working arrays.

use std::fmt;

/// One recorded step. Fields are private; records are read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord<A, P> {
    step: usize,
    action: A,
    explanation: String,
    state: P,
}

impl<A: Copy, P> StepRecord<A, P> {
    pub(crate) fn new(step: usize, action: A, explanation: String, state: P) -> Self {
        StepRecord {
            step,
            action,
            explanation,
            state,
        }
    }

    /// Position of this record within its trace, starting at 0.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn action(&self) -> A {
        self.action
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Algorithm state captured when the step was recorded.
    pub fn state(&self) -> &P {
        &self.state
    }
}

// ---------------------------------------------------------------------------
// Binary search
// ---------------------------------------------------------------------------

/// What a binary search step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Start,
    CheckMiddle,
    Found,
    SearchLeft,
    SearchRight,
    NotFound,
}

impl SearchAction {
    /// The label shown by the visualizer.
    pub fn label(self) -> &'static str {
        match self {
            SearchAction::Start => "Starting binary search",
            SearchAction::CheckMiddle => "Checking middle element",
            SearchAction::Found => "Found!",
            SearchAction::SearchLeft => "Search left half",
            SearchAction::SearchRight => "Search right half",
            SearchAction::NotFound => "Not found",
        }
    }
}

impl fmt::Display for SearchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Binary search bounds at one step.
///
/// `left` and `right` are signed: `right` is `-1` for an empty array and
/// after discarding the left-most element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    pub left: i64,
    pub right: i64,
    pub mid: Option<usize>,
    /// Index of the element being compared against the query.
    pub compare: Option<usize>,
    pub found: bool,
}

// ---------------------------------------------------------------------------
// Quicksort
// ---------------------------------------------------------------------------

/// What a quicksort step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAction {
    Initial,
    Partition,
    ChoosePivot,
    Compare,
    Swap,
    PlacePivot,
    Sorted,
}

impl SortAction {
    /// The label shown by the visualizer.
    pub fn label(self) -> &'static str {
        match self {
            SortAction::Initial => "Initial array",
            SortAction::Partition => "Partition",
            SortAction::ChoosePivot => "Choose pivot",
            SortAction::Compare => "Comparing",
            SortAction::Swap => "Swap",
            SortAction::PlacePivot => "Place pivot",
            SortAction::Sorted => "Sorted!",
        }
    }
}

impl fmt::Display for SortAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full quicksort state at one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Snapshot of the distance array.
    pub distances: Vec<i64>,
    /// Snapshot of the name array, index-aligned with `distances`.
    pub names: Vec<String>,
    pub pivot: Option<usize>,
    /// Lomuto boundary `i`; may be `low - 1` (including `-1`) before any swap.
    pub left: Option<i64>,
    /// Scan index `j`.
    pub right: Option<usize>,
    pub low: i64,
    pub high: i64,
}
