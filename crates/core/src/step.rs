use std::ops::Index;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::Snapshot;

/// One frame of an animation: a snapshot and the pseudo-code line behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Step {
    /// The array state at this step.
    pub snapshot: Snapshot,

    /// Index of the pseudo-code line that produced this step.
    ///
    /// Only set by generators that model line-level stepping.
    pub source_line: Option<usize>,
}

impl Step {
    /// Creates a step with no pseudo-code line.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            source_line: None,
        }
    }

    /// Creates a step tagged with a pseudo-code line.
    #[must_use]
    pub fn at_line(snapshot: Snapshot, line: usize) -> Self {
        Self {
            snapshot,
            source_line: Some(line),
        }
    }
}

/// The complete, ordered output of a step generator.
///
/// A sequence always holds at least one step, and its last step is the sorted
/// array with every element marked sorted. The only way to build one is
/// [`Recorder::finish`](crate::Recorder::finish), which appends that step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StepSequence {
    steps: Vec<Step>,
}

#[allow(clippy::len_without_is_empty)]
impl StepSequence {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "step sequences are never empty");
        Self { steps }
    }

    /// Returns the number of steps. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns the index of the last step.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Returns the step at `idx`, if in bounds.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Step> {
        self.steps.get(idx)
    }

    /// Returns the first step.
    #[must_use]
    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    /// Returns the last step: the sorted, fully highlighted array.
    #[must_use]
    pub fn last(&self) -> &Step {
        &self.steps[self.last_index()]
    }

    /// Returns all steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterates over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl Index<usize> for StepSequence {
    type Output = Step;

    fn index(&self, idx: usize) -> &Step {
        &self.steps[idx]
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
