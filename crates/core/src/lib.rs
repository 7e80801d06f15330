//! Core types for sortscope, an educational sorting visualizer.
//!
//! This crate defines the shared vocabulary that step generators, the playback
//! driver, and renderers build on:
//!
//! - [`Element`] and [`VisualState`]: one array slot and its highlight
//! - [`Snapshot`]: the whole array at one instant
//! - [`Step`] and [`StepSequence`]: snapshots in the order an algorithm
//!   produced them, optionally tagged with a pseudo-code line
//! - [`Palette`]: maps visual states to renderer-specific markers
//! - [`Recorder`]: builds a [`StepSequence`] while reporting each [`Event`]
//!   to an [`Observer`]

mod element;
mod observer;
mod palette;
mod record;
mod snapshot;
mod step;

pub use element::{Element, VisualState};
pub use observer::Observer;
pub use palette::Palette;
pub use record::{Event, Recorder};
pub use snapshot::Snapshot;
pub use step::{Step, StepSequence};
