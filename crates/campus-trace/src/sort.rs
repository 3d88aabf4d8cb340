//! Quicksort of locations by distance from a reference location, with step
//! recording.
//!
//! Distances are truncated Euclidean distances. The sort is a recursive
//! Lomuto-partition quicksort with the last element of each subrange as the
//! pivot. Equal distances are never swapped with each other within one
//! partition pass (the comparison is strict), but the sort as a whole is not
//! stable: the relative order of equal distances in the output is whatever
//! the partitioning happens to leave.
//!
//! Each run owns its working arrays and its recorder. Every recorded step
//! carries its own copy of both arrays.

use campus_core::{CampusGraph, Location, LocationId};
use serde::Serialize;

use crate::error::TraceError;
use crate::recorder::{Trace, TraceRecorder};
use crate::step::{SortAction, SortState, StepRecord};

pub type SortStep = StepRecord<SortAction, SortState>;
pub type SortTrace = Trace<SortAction, SortState>;

/// A location name paired with its distance from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedLocation {
    pub name: String,
    pub distance: i64,
}

/// Everything a quicksort run produced.
#[derive(Debug, Clone)]
pub struct SortOutcome {
    pub reference: LocationId,
    pub reference_name: String,
    /// Every location except the reference, ascending by distance.
    pub sorted: Vec<RankedLocation>,
    pub trace: SortTrace,
}

/// Straight-line distance truncated toward zero.
pub fn truncated_distance(from: &Location, to: &Location) -> i64 {
    from.distance_to(to) as i64
}

/// Sorts every location of `campus` by distance from `reference`.
pub fn sort_campus(campus: &CampusGraph, reference: LocationId) -> Result<SortOutcome, TraceError> {
    sort_by_distance(&campus.locations(), reference)
}

/// Runs a traced quicksort of `nodes` by distance from `reference`.
///
/// Fails with [`TraceError::InvalidReference`] before computing anything if
/// `reference` is not the id of one of `nodes`.
pub fn sort_by_distance(
    nodes: &[Location],
    reference: LocationId,
) -> Result<SortOutcome, TraceError> {
    let origin = nodes
        .iter()
        .find(|node| node.id == reference)
        .ok_or(TraceError::InvalidReference {
            id: reference,
            len: nodes.len(),
        })?;

    let (distances, names) = nodes
        .iter()
        .filter(|node| node.id != reference)
        .map(|node| (truncated_distance(origin, node), node.name.clone()))
        .unzip();

    let mut run = QuickSortRun {
        distances,
        names,
        recorder: TraceRecorder::new(),
    };

    let len = run.distances.len();
    let high = len as i64 - 1;
    run.record(
        SortAction::Initial,
        format!(
            "Sorting {} buildings by distance from {}",
            len, origin.name
        ),
        run.snapshot(0, high),
    );

    if let Some(last) = len.checked_sub(1) {
        run.quicksort(0, last);
    }

    run.record(
        SortAction::Sorted,
        format!("Array is now sorted by distance from {}", origin.name),
        run.snapshot(0, high),
    );

    tracing::debug!(
        reference = reference.0,
        locations = len,
        steps = run.recorder.len(),
        "quicksort finished"
    );

    let QuickSortRun {
        distances,
        names,
        recorder,
    } = run;

    Ok(SortOutcome {
        reference,
        reference_name: origin.name.clone(),
        sorted: names
            .into_iter()
            .zip(distances)
            .map(|(name, distance)| RankedLocation { name, distance })
            .collect(),
        trace: recorder.finish(),
    })
}

/// Working state of one quicksort invocation.
struct QuickSortRun {
    distances: Vec<i64>,
    /// Index-aligned with `distances`; always swapped together.
    names: Vec<String>,
    recorder: TraceRecorder<SortAction, SortState>,
}

impl QuickSortRun {
    /// Copies the working arrays into a state with no pointers set.
    fn snapshot(&self, low: i64, high: i64) -> SortState {
        SortState {
            distances: self.distances.clone(),
            names: self.names.clone(),
            pivot: None,
            left: None,
            right: None,
            low,
            high,
        }
    }

    fn record(&mut self, action: SortAction, explanation: String, state: SortState) {
        self.recorder.record(action, explanation, state);
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.distances.swap(a, b);
        self.names.swap(a, b);
    }

    fn quicksort(&mut self, low: usize, high: usize) {
        if low >= high {
            return;
        }

        self.record(
            SortAction::Partition,
            format!("Sorting subarray from index {low} to {high}"),
            self.snapshot(low as i64, high as i64),
        );

        let pivot = self.partition(low, high);

        if pivot > low {
            self.quicksort(low, pivot - 1);
        }
        self.quicksort(pivot + 1, high);
    }

    /// Lomuto partition of `[low, high]` around `distances[high]`. Returns the
    /// pivot's final index.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let (low_i, high_i) = (low as i64, high as i64);
        let pivot = self.distances[high];

        self.record(
            SortAction::ChoosePivot,
            format!(
                "Selected pivot: {}m ({}) at index {}",
                pivot, self.names[high], high
            ),
            SortState {
                pivot: Some(high),
                ..self.snapshot(low_i, high_i)
            },
        );

        // Last index of the "smaller than pivot" region; low - 1 when empty.
        let mut boundary = low_i - 1;

        for j in low..high {
            self.record(
                SortAction::Compare,
                format!(
                    "Compare {}m ({}) with pivot {}m",
                    self.distances[j], self.names[j], pivot
                ),
                SortState {
                    pivot: Some(high),
                    left: Some(boundary),
                    right: Some(j),
                    ..self.snapshot(low_i, high_i)
                },
            );

            if self.distances[j] < pivot {
                boundary += 1;
                let i = boundary as usize;
                self.swap(i, j);

                self.record(
                    SortAction::Swap,
                    format!(
                        "Swapped {} and {} (both smaller than pivot)",
                        self.names[i], self.names[j]
                    ),
                    SortState {
                        pivot: Some(high),
                        left: Some(boundary),
                        right: Some(j),
                        ..self.snapshot(low_i, high_i)
                    },
                );
            }
        }

        let placed = (boundary + 1) as usize;
        self.swap(placed, high);

        self.record(
            SortAction::PlacePivot,
            format!(
                "Placed pivot {} at its final position (index {})",
                self.names[placed], placed
            ),
            SortState {
                pivot: Some(placed),
                ..self.snapshot(low_i, high_i)
            },
        );

        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: u32, name: &str, x: f64, y: f64) -> Location {
        Location {
            id: LocationId(id),
            name: name.to_string(),
            kind: "building".into(),
            x,
            y,
        }
    }

    fn abcd() -> Vec<Location> {
        vec![
            loc(0, "A", 0.0, 0.0),
            loc(1, "B", 3.0, 4.0),
            loc(2, "C", 0.0, 5.0),
            loc(3, "D", 1.0, 1.0),
        ]
    }

    /// Reference at the origin plus one location per distance, on the x axis.
    fn line(distances: &[i64]) -> Vec<Location> {
        let mut nodes = vec![loc(0, "Origin", 0.0, 0.0)];
        for (i, &d) in distances.iter().enumerate() {
            nodes.push(loc(i as u32 + 1, &format!("P{}", i + 1), d as f64, 0.0));
        }
        nodes
    }

    fn actions(outcome: &SortOutcome) -> Vec<SortAction> {
        outcome.trace.iter().map(|s| s.action()).collect()
    }

    #[test]
    fn sorts_example_campus_from_a() {
        let outcome = sort_by_distance(&abcd(), LocationId(0)).unwrap();

        assert_eq!(outcome.reference_name, "A");
        let distances: Vec<_> = outcome.sorted.iter().map(|r| r.distance).collect();
        assert_eq!(distances, vec![1, 5, 5]);
        assert_eq!(outcome.sorted[0].name, "D");

        let mut tail: Vec<_> = outcome.sorted[1..].iter().map(|r| r.name.as_str()).collect();
        tail.sort();
        assert_eq!(tail, vec!["B", "C"]);
    }

    #[test]
    fn distances_truncate_toward_zero() {
        let a = loc(0, "A", 0.0, 0.0);
        assert_eq!(truncated_distance(&a, &loc(1, "D", 1.0, 1.0)), 1);
        assert_eq!(truncated_distance(&a, &loc(2, "E", -2.0, -2.0)), 2);
        assert_eq!(truncated_distance(&a, &loc(3, "F", 0.0, 2.999)), 2);
    }

    #[test]
    fn unknown_reference_is_rejected() {
        let err = sort_by_distance(&abcd(), LocationId(9)).unwrap_err();
        assert_eq!(
            err,
            TraceError::InvalidReference {
                id: LocationId(9),
                len: 4
            }
        );
    }

    #[test]
    fn empty_dataset_is_an_invalid_reference() {
        assert!(sort_by_distance(&[], LocationId(0)).is_err());
    }

    #[test]
    fn lone_reference_yields_initial_and_sorted_only() {
        let outcome = sort_by_distance(&line(&[]), LocationId(0)).unwrap();

        assert!(outcome.sorted.is_empty());
        assert_eq!(actions(&outcome), vec![SortAction::Initial, SortAction::Sorted]);
        let first = outcome.trace.first().unwrap().state();
        assert_eq!((first.low, first.high), (0, -1));
        assert!(first.distances.is_empty());
    }

    #[test]
    fn single_element_is_not_partitioned() {
        let outcome = sort_by_distance(&line(&[7]), LocationId(0)).unwrap();
        assert_eq!(actions(&outcome), vec![SortAction::Initial, SortAction::Sorted]);
        assert_eq!(outcome.sorted, vec![RankedLocation { name: "P1".into(), distance: 7 }]);
    }

    #[test]
    fn records_full_lomuto_sequence() {
        // [3, 1, 2]: pivot 2, 3 stays, 1 swaps to the front, pivot lands at 1.
        let outcome = sort_by_distance(&line(&[3, 1, 2]), LocationId(0)).unwrap();

        use SortAction::*;
        assert_eq!(
            actions(&outcome),
            vec![
                Initial, Partition, ChoosePivot, Compare, Compare, Swap, PlacePivot, Sorted
            ]
        );

        let steps = outcome.trace.steps();
        assert_eq!(steps[2].explanation(), "Selected pivot: 2m (P3) at index 2");

        let first_compare = steps[3].state();
        assert_eq!(first_compare.left, Some(-1));
        assert_eq!(first_compare.right, Some(0));

        let swap = steps[5].state();
        assert_eq!(swap.distances, vec![1, 3, 2]);
        assert_eq!(swap.names, vec!["P2", "P1", "P3"]);
        assert_eq!((swap.left, swap.right), (Some(0), Some(1)));

        let placed = steps[6].state();
        assert_eq!(placed.pivot, Some(1));
        assert_eq!(placed.distances, vec![1, 2, 3]);

        let distances: Vec<_> = outcome.sorted.iter().map(|r| r.distance).collect();
        assert_eq!(distances, vec![1, 2, 3]);
    }

    #[test]
    fn first_and_last_steps_span_whole_array() {
        let outcome = sort_by_distance(&line(&[5, 4, 3, 2, 1]), LocationId(0)).unwrap();

        let first = outcome.trace.first().unwrap();
        let last = outcome.trace.last().unwrap();
        assert_eq!(first.action(), SortAction::Initial);
        assert_eq!(first.state().distances, vec![5, 4, 3, 2, 1]);
        assert_eq!(last.action(), SortAction::Sorted);
        assert_eq!(last.state().distances, vec![1, 2, 3, 4, 5]);
        for step in [first, last] {
            assert_eq!((step.state().low, step.state().high), (0, 4));
            assert_eq!(step.state().pivot, None);
        }
    }

    #[test]
    fn equal_distances_are_not_swapped_with_the_pivot() {
        let outcome = sort_by_distance(&line(&[4, 4, 4]), LocationId(0)).unwrap();
        assert!(outcome.trace.iter().all(|s| s.action() != SortAction::Swap));
        let distances: Vec<_> = outcome.sorted.iter().map(|r| r.distance).collect();
        assert_eq!(distances, vec![4, 4, 4]);
    }

    #[test]
    fn place_pivot_splits_the_range() {
        let outcome =
            sort_by_distance(&line(&[9, 2, 7, 2, 5, 8, 1, 5]), LocationId(0)).unwrap();

        for step in outcome.trace.iter().filter(|s| s.action() == SortAction::PlacePivot) {
            let state = step.state();
            let p = state.pivot.unwrap();
            let (low, high) = (state.low as usize, state.high as usize);
            let pivot = state.distances[p];
            assert!(state.distances[low..p].iter().all(|&d| d < pivot));
            assert!(state.distances[p + 1..=high].iter().all(|&d| d >= pivot));
        }
    }

    #[test]
    fn recorded_snapshots_do_not_alias_working_arrays() {
        let mut run = QuickSortRun {
            distances: vec![3, 1, 2],
            names: vec!["a".into(), "b".into(), "c".into()],
            recorder: TraceRecorder::new(),
        };
        run.record(SortAction::Initial, "before".into(), run.snapshot(0, 2));

        run.swap(0, 1);
        run.distances[2] = 99;
        run.names[2].push_str("-changed");

        let recorded = run.recorder.steps()[0].state();
        assert_eq!(recorded.distances, vec![3, 1, 2]);
        assert_eq!(recorded.names, vec!["a", "b", "c"]);
    }

    #[test]
    fn earlier_steps_keep_their_arrays_after_sorting() {
        let outcome = sort_by_distance(&line(&[3, 1, 2]), LocationId(0)).unwrap();
        let initial = outcome.trace.first().unwrap().state();
        assert_eq!(initial.distances, vec![3, 1, 2]);
        assert_eq!(initial.names, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn reference_in_the_middle_is_excluded() {
        let outcome = sort_by_distance(&abcd(), LocationId(2)).unwrap();
        assert_eq!(outcome.sorted.len(), 3);
        assert!(outcome.sorted.iter().all(|r| r.name != "C"));
    }
}
