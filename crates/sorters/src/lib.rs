//! Step generators for classic comparison sorts.
//!
//! Each generator takes the values of an array and returns a complete
//! [`StepSequence`]: one snapshot per comparison or mutation the algorithm
//! performs, ending with the sorted array marked [`VisualState::Sorted`].
//! Generation is eager and deterministic, and the input slice is never
//! modified.
//!
//! # Generators
//!
//! - [`bubble`]: adjacent swaps, with optional pseudo-code line markers
//! - [`selection`]: minimum scan over the unsorted suffix
//! - [`insertion`]: sinks each element into the sorted prefix
//! - [`quick`]: recursive Lomuto partitioning, last element as pivot
//! - [`merge`]: top-down stable merge sort
//!
//! Use [`Algorithm`] to choose a generator at runtime.
//!
//! # Observers
//!
//! Every module also offers `steps_observed`, which reports each step to an
//! [`Observer`] as soon as it is recorded. The returned sequence is identical
//! to the unobserved one.
//!
//! [`StepSequence`]: sortscope_core::StepSequence
//! [`VisualState::Sorted`]: sortscope_core::VisualState::Sorted
//! [`Observer`]: sortscope_core::Observer

mod algorithm;
mod highlight;
mod options;

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use options::Options;
