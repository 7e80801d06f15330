#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an element should be highlighted in a snapshot.
///
/// `Default`, `Comparing`, and `Sorted` are shared by every algorithm.
/// The remaining states are presentation hints used by quick sort (`Pivot`)
/// and merge sort (`LeftRun`, `RightRun`, `Merged`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VisualState {
    #[default]
    Default,
    Comparing,
    Sorted,
    Pivot,
    LeftRun,
    RightRun,
    Merged,
}

impl VisualState {
    /// Every state, in declaration order.
    pub const ALL: [VisualState; 7] = [
        VisualState::Default,
        VisualState::Comparing,
        VisualState::Sorted,
        VisualState::Pivot,
        VisualState::LeftRun,
        VisualState::RightRun,
        VisualState::Merged,
    ];
}

/// A single array slot: its value and how it is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    value: u32,
    state: VisualState,
}

impl Element {
    /// Creates an element with the given value and highlight.
    #[must_use]
    pub fn new(value: u32, state: VisualState) -> Self {
        Self { value, state }
    }

    /// Returns the element's value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the element's highlight.
    #[must_use]
    pub fn state(&self) -> VisualState {
        self.state
    }

    /// Returns a copy with the same value and a different highlight.
    #[must_use]
    pub fn with_state(self, state: VisualState) -> Self {
        Self { state, ..self }
    }
}
