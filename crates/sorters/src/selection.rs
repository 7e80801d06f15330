//! Selection sort.
//!
//! For each boundary `i`, scans `i+1..n` for the smallest value and swaps it
//! into position `i`. Each comparison emits a snapshot with the current
//! minimum candidate and the scanned index marked comparing. After the swap a
//! snapshot marks the grown prefix `0..=i` sorted.

use sortscope_core::{Event, Observer, Recorder, StepSequence};
use tracing::debug;

use crate::Options;
use crate::highlight::{pair, sorted_through};

/// Generates the selection sort steps for `values`.
#[must_use]
pub fn steps(values: &[u32], options: &Options) -> StepSequence {
    steps_observed(values, options, ())
}

/// Generates the selection sort steps for `values`, reporting each to `observer`.
pub fn steps_observed<Obs>(values: &[u32], _options: &Options, observer: Obs) -> StepSequence
where
    Obs: for<'a> Observer<Event<'a>>,
{
    let mut arr = values.to_vec();
    let mut recorder = Recorder::new(observer);
    let n = arr.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            recorder.record(&arr, pair(min_idx, j));
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            arr.swap(i, min_idx);
        }
        recorder.record(&arr, sorted_through(i));
    }

    let sequence = recorder.finish(&arr);
    debug!(algorithm = "selection", len = n, steps = sequence.len(), "generated steps");
    sequence
}
