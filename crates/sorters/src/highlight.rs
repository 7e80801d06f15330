//! Small highlight builders shared by the generators.

use sortscope_core::VisualState;

/// Marks `a` and `b` as comparing, everything else default.
pub(crate) fn pair(a: usize, b: usize) -> impl Fn(usize) -> VisualState + Copy {
    move |idx| {
        if idx == a || idx == b {
            VisualState::Comparing
        } else {
            VisualState::Default
        }
    }
}

/// Marks `0..=last` as sorted, everything else default.
pub(crate) fn sorted_through(last: usize) -> impl Fn(usize) -> VisualState + Copy {
    move |idx| {
        if idx <= last {
            VisualState::Sorted
        } else {
            VisualState::Default
        }
    }
}

/// Marks only `target` with `state`, everything else default.
pub(crate) fn single(target: usize, state: VisualState) -> impl Fn(usize) -> VisualState + Copy {
    move |idx| {
        if idx == target {
            state
        } else {
            VisualState::Default
        }
    }
}
