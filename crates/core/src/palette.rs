#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Snapshot, VisualState};

/// Maps each [`VisualState`] to a renderer-specific marker.
///
/// A marker can be anything a renderer understands: a hex string from a config
/// file, a GUI color, a terminal glyph. Generators never see a palette, so
/// swapping palettes changes how a sequence looks but never the sequence
/// itself.
///
/// # Example
///
/// ```
/// use sortscope_core::{Palette, Snapshot, VisualState};
///
/// let palette = Palette::new('.', '?', '#');
/// let snapshot = Snapshot::uniform(&[1, 2], VisualState::Sorted);
///
/// let painted: Vec<_> = palette.paint(&snapshot).collect();
/// assert_eq!(painted, [(1, &'#'), (2, &'#')]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Palette<M> {
    pub default: M,
    pub comparing: M,
    pub sorted: M,
    pub pivot: M,
    pub left_run: M,
    pub right_run: M,
    pub merged: M,
}

impl<M: Clone> Palette<M> {
    /// Creates a palette from the three core markers.
    ///
    /// Accent states borrow a core marker: `Pivot` uses `comparing`,
    /// `LeftRun` and `RightRun` use `default`, `Merged` uses `sorted`.
    pub fn new(default: M, comparing: M, sorted: M) -> Self {
        Self {
            pivot: comparing.clone(),
            left_run: default.clone(),
            right_run: default.clone(),
            merged: sorted.clone(),
            default,
            comparing,
            sorted,
        }
    }
}

impl<M> Palette<M> {
    /// Replaces the accent markers.
    #[must_use]
    pub fn with_accents(self, pivot: M, left_run: M, right_run: M, merged: M) -> Self {
        Self {
            pivot,
            left_run,
            right_run,
            merged,
            ..self
        }
    }

    /// Returns the marker for a state.
    pub fn marker(&self, state: VisualState) -> &M {
        match state {
            VisualState::Default => &self.default,
            VisualState::Comparing => &self.comparing,
            VisualState::Sorted => &self.sorted,
            VisualState::Pivot => &self.pivot,
            VisualState::LeftRun => &self.left_run,
            VisualState::RightRun => &self.right_run,
            VisualState::Merged => &self.merged,
        }
    }

    /// Pairs each value in `snapshot` with the marker for its state.
    pub fn paint<'a>(&'a self, snapshot: &'a Snapshot) -> impl Iterator<Item = (u32, &'a M)> {
        snapshot
            .iter()
            .map(|element| (element.value(), self.marker(element.state())))
    }

    /// Converts every marker, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<N, E, F>(self, mut f: F) -> Result<Palette<N>, E>
    where
        F: FnMut(M) -> Result<N, E>,
    {
        Ok(Palette {
            default: f(self.default)?,
            comparing: f(self.comparing)?,
            sorted: f(self.sorted)?,
            pivot: f(self.pivot)?,
            left_run: f(self.left_run)?,
            right_run: f(self.right_run)?,
            merged: f(self.merged)?,
        })
    }
}

/// Hex colors matching the classic web visualizer look.
impl Default for Palette<String> {
    fn default() -> Self {
        Palette::new(
            "#3b82f6".to_owned(),
            "#ef4444".to_owned(),
            "#22c55e".to_owned(),
        )
        .with_accents(
            "#f59e42".to_owned(),
            "#3b82f6".to_owned(),
            "#f59e42".to_owned(),
            "#a3e635".to_owned(),
        )
    }
}
