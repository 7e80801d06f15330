use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Element, VisualState};

/// The full array at one instant.
///
/// A snapshot owns its elements. Two snapshots never share storage, so a
/// renderer can hold on to one while later ones are produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    elements: Vec<Element>,
}

impl Snapshot {
    /// Builds a snapshot by asking `state` for the highlight of each index.
    #[must_use]
    pub fn from_fn<F>(values: &[u32], mut state: F) -> Self
    where
        F: FnMut(usize) -> VisualState,
    {
        let elements = values
            .iter()
            .enumerate()
            .map(|(idx, &value)| Element::new(value, state(idx)))
            .collect();
        Self { elements }
    }

    /// Builds a snapshot with every element in the same state.
    #[must_use]
    pub fn uniform(values: &[u32], state: VisualState) -> Self {
        Self::from_fn(values, |_| state)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the snapshot has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `idx`, if in bounds.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Element> {
        self.elements.get(idx)
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Iterates over the element values in array order.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.elements.iter().map(Element::value)
    }

    /// Iterates over the element highlights in array order.
    pub fn states(&self) -> impl Iterator<Item = VisualState> + '_ {
        self.elements.iter().map(Element::state)
    }

    /// Returns `true` if the values are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.elements
            .windows(2)
            .all(|pair| pair[0].value() <= pair[1].value())
    }

    /// Returns `true` if every element has the given highlight.
    ///
    /// Vacuously true for an empty snapshot.
    #[must_use]
    pub fn all_in(&self, state: VisualState) -> bool {
        self.elements.iter().all(|e| e.state() == state)
    }
}

impl Index<usize> for Snapshot {
    type Output = Element;

    fn index(&self, idx: usize) -> &Element {
        &self.elements[idx]
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
