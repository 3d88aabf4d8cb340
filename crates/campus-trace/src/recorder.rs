//! Append-only trace recording.
//!
//! Each engine invocation creates its own [`TraceRecorder`], appends steps
//! while the algorithm runs, and converts it into a [`Trace`] when done. Step
//! indices are assigned here and nowhere else.

use crate::step::StepRecord;

/// Append-only, monotonically numbered log of steps.
#[derive(Debug)]
pub struct TraceRecorder<A, P> {
    steps: Vec<StepRecord<A, P>>,
}

impl<A: Copy, P> TraceRecorder<A, P> {
    pub fn new() -> Self {
        TraceRecorder { steps: Vec::new() }
    }

    /// Appends a step and returns the index it was given.
    pub fn record(&mut self, action: A, explanation: impl Into<String>, state: P) -> usize {
        let step = self.steps.len();
        self.steps
            .push(StepRecord::new(step, action, explanation.into(), state));
        step
    }

    pub fn steps(&self) -> &[StepRecord<A, P>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seals the log.
    pub fn finish(self) -> Trace<A, P> {
        Trace { steps: self.steps }
    }
}

impl<A: Copy, P> Default for TraceRecorder<A, P> {
    fn default() -> Self {
        Self::new()
    }
}

/// A finished, read-only trace in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<A, P> {
    steps: Vec<StepRecord<A, P>>,
}

impl<A, P> Trace<A, P> {
    pub fn steps(&self) -> &[StepRecord<A, P>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&StepRecord<A, P>> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&StepRecord<A, P>> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord<A, P>> {
        self.steps.iter()
    }
}

impl<'a, A, P> IntoIterator for &'a Trace<A, P> {
    type Item = &'a StepRecord<A, P>;
    type IntoIter = std::slice::Iter<'a, StepRecord<A, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
