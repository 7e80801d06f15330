//! Top-down merge sort.
//!
//! # Algorithm
//!
//! `merge_sort(start, end)` splits the half-open range at
//! `mid = (start + end) / 2`, sorts both halves, then merges them. The merge
//! copies the halves into `left` and `right` buffers and repeatedly writes the
//! smaller front element to the output index `k`. Ties take from `left`, so
//! the sort is stable.
//!
//! While merging, the elements still waiting in the buffers are laid out
//! behind `k` (left remainder first, then right remainder). Every snapshot is
//! therefore a permutation of the input.
//!
//! # Steps
//!
//! Each comparison emits a snapshot with `k` marked comparing, and each merge
//! ends with a snapshot over the merged range.
//!
//! With [`Options::highlight_runs`]:
//!
//! - a merge opens with `[start, mid)` marked [`VisualState::LeftRun`] and
//!   `[mid, end)` marked [`VisualState::RightRun`];
//! - comparison snapshots mark the placed prefix `[start, k)`
//!   [`VisualState::Merged`], `k` comparing, and the pending left and right
//!   elements with their run tints;
//! - the closing snapshot marks `[start, end)` merged.
//!
//! Without it, everything other than `k` is default, including the closing
//! snapshot. Elements outside the active range are always default.

use sortscope_core::{Event, Observer, Recorder, StepSequence, VisualState};
use tracing::debug;

use crate::Options;
use crate::highlight::single;

/// Generates the merge sort steps for `values`.
#[must_use]
pub fn steps(values: &[u32], options: &Options) -> StepSequence {
    steps_observed(values, options, ())
}

/// Generates the merge sort steps for `values`, reporting each to `observer`.
pub fn steps_observed<Obs>(values: &[u32], options: &Options, observer: Obs) -> StepSequence
where
    Obs: for<'a> Observer<Event<'a>>,
{
    let mut merger = Merger {
        arr: values.to_vec(),
        recorder: Recorder::new(observer),
        runs: options.highlight_runs,
    };
    merger.sort(0, values.len());

    let Merger { arr, recorder, runs } = merger;
    let sequence = recorder.finish(&arr);
    debug!(algorithm = "merge", len = arr.len(), steps = sequence.len(), runs, "generated steps");
    sequence
}

struct Merger<Obs> {
    arr: Vec<u32>,
    recorder: Recorder<Obs>,
    runs: bool,
}

impl<Obs> Merger<Obs>
where
    Obs: for<'a> Observer<Event<'a>>,
{
    fn sort(&mut self, start: usize, end: usize) {
        if end - start <= 1 {
            return;
        }
        let mid = (start + end) / 2;
        self.sort(start, mid);
        self.sort(mid, end);
        self.merge(start, mid, end);
    }

    fn merge(&mut self, start: usize, mid: usize, end: usize) {
        let left = self.arr[start..mid].to_vec();
        let right = self.arr[mid..end].to_vec();

        if self.runs {
            self.recorder.record(&self.arr, |idx| {
                if idx < start || idx >= end {
                    VisualState::Default
                } else if idx < mid {
                    VisualState::LeftRun
                } else {
                    VisualState::RightRun
                }
            });
        }

        let (mut l, mut r, mut k) = (0, 0, start);
        while l < left.len() && r < right.len() {
            if self.runs {
                let split = k + (left.len() - l);
                self.recorder.record(&self.arr, |idx| {
                    if idx < start || idx >= end {
                        VisualState::Default
                    } else if idx < k {
                        VisualState::Merged
                    } else if idx == k {
                        VisualState::Comparing
                    } else if idx < split {
                        VisualState::LeftRun
                    } else {
                        VisualState::RightRun
                    }
                });
            } else {
                self.recorder
                    .record(&self.arr, single(k, VisualState::Comparing));
            }

            if left[l] <= right[r] {
                self.arr[k] = left[l];
                l += 1;
            } else {
                self.arr[k] = right[r];
                r += 1;
            }
            k += 1;

            let split = k + (left.len() - l);
            self.arr[k..split].copy_from_slice(&left[l..]);
            self.arr[split..end].copy_from_slice(&right[r..]);
        }

        // Whatever remains is already in order behind `k`.
        debug_assert!(self.arr[start..end].windows(2).all(|w| w[0] <= w[1]));

        let runs = self.runs;
        self.recorder.record(&self.arr, |idx| {
            if runs && (start..end).contains(&idx) {
                VisualState::Merged
            } else {
                VisualState::Default
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sortscope_core::VisualState::{
        Comparing as C, Default as D, LeftRun as L, Merged as M, RightRun as R,
    };

    fn values(seq: &StepSequence, idx: usize) -> Vec<u32> {
        seq[idx].snapshot.values().collect()
    }

    fn states(seq: &StepSequence, idx: usize) -> Vec<VisualState> {
        seq[idx].snapshot.states().collect()
    }

    #[test]
    fn merges_halves_plain() {
        let seq = steps(&[4, 2, 1, 3], &Options::plain());

        // merge [4] [2]: 1 compare + close; merge [1] [3]: 1 + close;
        // merge [2,4] [1,3]: 3 + close; final.
        assert_eq!(seq.len(), 9);

        assert_eq!(values(&seq, 0), [4, 2, 1, 3]);
        assert_eq!(states(&seq, 0), [C, D, D, D]);

        // Left half sorted, right half already in order.
        assert_eq!(values(&seq, 1), [2, 4, 1, 3]);
        assert_eq!(states(&seq, 1), [D, D, D, D]);
        assert_eq!(values(&seq, 3), [2, 4, 1, 3]);

        // Top-level merge: 1 is taken first, the left run shifts behind it.
        assert_eq!(values(&seq, 4), [2, 4, 1, 3]);
        assert_eq!(values(&seq, 5), [1, 2, 4, 3]);
        assert_eq!(states(&seq, 5), [D, C, D, D]);
        assert_eq!(values(&seq, 7), [1, 2, 3, 4]);

        assert_eq!(seq.last().snapshot.values().collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert!(seq.last().snapshot.all_in(VisualState::Sorted));
    }

    #[test]
    fn run_highlights_follow_the_cursor() {
        let seq = steps(&[4, 2, 1, 3], &Options::plain().with_run_highlights());

        // Each of the three merges gains an opening snapshot.
        assert_eq!(seq.len(), 12);

        // Opening of merge [4] [2].
        assert_eq!(states(&seq, 0), [L, R, D, D]);
        assert_eq!(states(&seq, 1), [C, R, D, D]);
        // Closing of merge [4] [2].
        assert_eq!(states(&seq, 2), [M, M, D, D]);

        // Top-level merge opens on [2, 4 | 1, 3].
        assert_eq!(states(&seq, 6), [L, L, R, R]);
        assert_eq!(states(&seq, 7), [C, L, R, R]);
        // After taking 1: placed prefix merged, pending left run shifted right.
        assert_eq!(values(&seq, 8), [1, 2, 4, 3]);
        assert_eq!(states(&seq, 8), [M, C, L, R]);
        assert_eq!(values(&seq, 9), [1, 2, 4, 3]);
        assert_eq!(states(&seq, 9), [M, M, C, R]);
        assert_eq!(states(&seq, 10), [M, M, M, M]);
    }

    #[test]
    fn ties_prefer_left() {
        // With ties taken from the left, [1] [1] needs no movement.
        let seq = steps(&[1, 1], &Options::plain());

        assert!(seq.iter().all(|s| s.snapshot.values().eq([1, 1])));
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn odd_length_split() {
        let seq = steps(&[3, 2, 1], &Options::default());

        assert_eq!(seq.last().snapshot.values().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn empty_input() {
        let seq = steps(&[], &Options::default());

        assert_eq!(seq.len(), 1);
        assert!(seq.last().snapshot.is_empty());
    }
}
