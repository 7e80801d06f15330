//! Insertion sort.
//!
//! Element `i` sinks left through the sorted prefix by adjacent swaps while
//! its left neighbor is larger. Every swap is preceded by a snapshot marking
//! the pair comparing and the rest of the prefix `0..i` sorted. When the
//! element settles, a snapshot marks `0..=i` sorted.
//!
//! The prefix is only sorted relative to itself until the last pass.

use sortscope_core::{Event, Observer, Recorder, StepSequence, VisualState};
use tracing::debug;

use crate::Options;
use crate::highlight::sorted_through;

/// Generates the insertion sort steps for `values`.
#[must_use]
pub fn steps(values: &[u32], options: &Options) -> StepSequence {
    steps_observed(values, options, ())
}

/// Generates the insertion sort steps for `values`, reporting each to `observer`.
pub fn steps_observed<Obs>(values: &[u32], _options: &Options, observer: Obs) -> StepSequence
where
    Obs: for<'a> Observer<Event<'a>>,
{
    let mut arr = values.to_vec();
    let mut recorder = Recorder::new(observer);
    let n = arr.len();

    for i in 1..n {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            recorder.record(&arr, |idx| {
                if idx == j || idx == j - 1 {
                    VisualState::Comparing
                } else if idx < i {
                    VisualState::Sorted
                } else {
                    VisualState::Default
                }
            });
            arr.swap(j, j - 1);
            j -= 1;
        }
        recorder.record(&arr, sorted_through(i));
    }

    let sequence = recorder.finish(&arr);
    debug!(algorithm = "insertion", len = n, steps = sequence.len(), "generated steps");
    sequence
}
