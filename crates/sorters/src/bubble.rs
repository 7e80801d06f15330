//! Bubble sort.
//!
//! # Algorithm
//!
//! Pass `i` walks `j` over `0..n-i-1`, comparing each adjacent pair and
//! swapping it when out of order. After pass `i` the largest `i + 1` values
//! sit at the end of the array.
//!
//! # Steps
//!
//! Plain output emits one snapshot per comparison with `j` and `j + 1`
//! marked [`VisualState::Comparing`], taken before the swap.
//!
//! With [`Options::source_lines`] the generator also follows the pseudo-code
//! in [`PSEUDO_CODE`], tagging each step with the line that produced it:
//!
//! | Line | Emitted                           |
//! |------|-----------------------------------|
//! | 0    | on entry to each outer pass       |
//! | 1    | before each comparison            |
//! | 2    | at the `if` check                 |
//! | 3    | after a swap                      |
//!
//! The line-1 steps are exactly the plain comparison steps, so both outputs
//! describe the same comparisons. The final all-sorted step carries no line.

use sortscope_core::{Event, Observer, Recorder, StepSequence, VisualState};
use tracing::debug;

use crate::Options;
use crate::highlight::pair;

/// Pseudo-code indexed by [`Step::source_line`](sortscope_core::Step).
pub const PSEUDO_CODE: [&str; 4] = [
    "for i in 0 .. n-1",
    "    for j in 0 .. n-i-1",
    "        if a[j] > a[j+1]",
    "            swap a[j], a[j+1]",
];

const LINE_PASS: usize = 0;
const LINE_COMPARE: usize = 1;
const LINE_CHECK: usize = 2;
const LINE_SWAP: usize = 3;

/// Generates the bubble sort steps for `values`.
#[must_use]
pub fn steps(values: &[u32], options: &Options) -> StepSequence {
    steps_observed(values, options, ())
}

/// Generates the bubble sort steps for `values`, reporting each to `observer`.
pub fn steps_observed<Obs>(values: &[u32], options: &Options, observer: Obs) -> StepSequence
where
    Obs: for<'a> Observer<Event<'a>>,
{
    let mut arr = values.to_vec();
    let mut recorder = Recorder::new(observer);
    let n = arr.len();
    let lines = options.source_lines;

    for i in 0..n.saturating_sub(1) {
        if lines {
            recorder.record_at(LINE_PASS, &arr, |_| VisualState::Default);
        }

        for j in 0..n - i - 1 {
            let comparing = pair(j, j + 1);

            if lines {
                recorder.record_at(LINE_COMPARE, &arr, comparing);
                recorder.record_at(LINE_CHECK, &arr, comparing);
            } else {
                recorder.record(&arr, comparing);
            }

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                if lines {
                    recorder.record_at(LINE_SWAP, &arr, comparing);
                }
            }
        }
    }

    let sequence = recorder.finish(&arr);
    debug!(algorithm = "bubble", len = n, steps = sequence.len(), lines, "generated steps");
    sequence
}
