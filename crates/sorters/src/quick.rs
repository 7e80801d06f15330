//! Quick sort with the Lomuto partition scheme.
//!
//! `partition(start, end)` takes `a[end]` as the pivot and walks `j` over
//! `start..end`, moving every value smaller than the pivot behind the boundary
//! `i`. Each comparison emits a snapshot with `j` comparing and `end` marked
//! [`VisualState::Pivot`]. Once the pivot is swapped into `i`, a snapshot
//! marks it sorted. Those marks are partial: only the final step guarantees a
//! globally sorted array.

use sortscope_core::{Event, Observer, Recorder, StepSequence, VisualState};
use tracing::debug;

use crate::Options;
use crate::highlight::single;

/// Generates the quick sort steps for `values`.
#[must_use]
pub fn steps(values: &[u32], options: &Options) -> StepSequence {
    steps_observed(values, options, ())
}

/// Generates the quick sort steps for `values`, reporting each to `observer`.
pub fn steps_observed<Obs>(values: &[u32], _options: &Options, observer: Obs) -> StepSequence
where
    Obs: for<'a> Observer<Event<'a>>,
{
    let mut arr = values.to_vec();
    let mut recorder = Recorder::new(observer);

    if let Some(end) = arr.len().checked_sub(1) {
        quick_sort(&mut arr, 0, end, &mut recorder);
    }

    let sequence = recorder.finish(&arr);
    debug!(algorithm = "quick", len = arr.len(), steps = sequence.len(), "generated steps");
    sequence
}

/// Sorts the inclusive range `start..=end`.
fn quick_sort<Obs>(arr: &mut [u32], start: usize, end: usize, recorder: &mut Recorder<Obs>)
where
    Obs: for<'a> Observer<Event<'a>>,
{
    if start >= end {
        return;
    }

    let split = partition(arr, start, end, recorder);
    if split > start {
        quick_sort(arr, start, split - 1, recorder);
    }
    quick_sort(arr, split + 1, end, recorder);
}

/// Partitions `start..=end` around `arr[end]` and returns the pivot's index.
fn partition<Obs>(arr: &mut [u32], start: usize, end: usize, recorder: &mut Recorder<Obs>) -> usize
where
    Obs: for<'a> Observer<Event<'a>>,
{
    let pivot = arr[end];
    let mut i = start;

    for j in start..end {
        recorder.record(arr, |idx| {
            if idx == j {
                VisualState::Comparing
            } else if idx == end {
                VisualState::Pivot
            } else {
                VisualState::Default
            }
        });
        if arr[j] < pivot {
            arr.swap(i, j);
            i += 1;
        }
    }

    arr.swap(i, end);
    recorder.record(arr, single(i, VisualState::Sorted));
    i
}
