//! Playback for sortscope step sequences.
//!
//! - [`array`]: random input arrays from an [`ArrayConfig`]
//! - [`Player`]: a state machine that walks one [`StepSequence`] on a fixed
//!   tick interval or on manual steps
//! - [`Session`]: the user-facing controls: regenerate, choose an algorithm,
//!   start, pause, resume, step
//! - [`config`]: TOML configuration for a session and its palette
//!
//! Nothing here is tied to a clock. Hosts call [`Session::tick`] (or
//! [`Player::tick`]) with the time elapsed since the previous call, which keeps
//! playback deterministic and easy to test.
//!
//! [`StepSequence`]: sortscope_core::StepSequence

pub mod array;
pub mod config;

mod player;
mod session;

pub use array::{ArrayConfig, ArrayConfigError};
pub use player::{
    Command, DEFAULT_INTERVAL, PlaybackConfigError, PlaybackState, Player, Transition, transition,
};
pub use session::{Outcome, Session};
