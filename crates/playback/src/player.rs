use std::time::Duration;

use sortscope_core::{Snapshot, Step, StepSequence};
use thiserror::Error;
use tracing::{debug, trace};

/// Tick interval used when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Where a [`Player`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    /// Showing the first step, not started yet.
    #[default]
    Idle,

    /// Advancing one step per tick.
    Running,

    /// Holding position; manual steps allowed.
    Paused,

    /// Showing the last step. Nothing further happens.
    Finished,
}

/// Inputs to the playback state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Begin auto-advancing from the first step.
    Start,

    /// Stop auto-advancing.
    Pause,

    /// Continue auto-advancing after a pause.
    Resume,

    /// Advance one step by hand.
    Step,

    /// One timer interval elapsed.
    Tick,
}

/// The result of applying a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State before the command.
    pub from: PlaybackState,

    /// State after the command.
    pub to: PlaybackState,

    /// Whether the cursor moved forward by one step.
    pub advanced: bool,
}

impl Transition {
    pub(crate) fn stay(state: PlaybackState) -> Self {
        Self {
            from: state,
            to: state,
            advanced: false,
        }
    }

    /// Returns `true` if the command had no effect.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.from == self.to && !self.advanced
    }
}

/// Errors that can occur when configuring playback.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}

/// Computes the next playback state.
///
/// `remaining` is the number of steps after the cursor. The state machine is:
///
/// - `Idle --Start--> Running`
/// - `Idle --Step--> Paused` (reveals the first step without advancing)
/// - `Running --Pause--> Paused`, `Paused --Resume--> Running`
/// - `Running --Tick--> Running` and `Paused --Step--> Paused`, advancing
///   one step
///
/// Whenever a transition would land in `Running` or `Paused` with nothing
/// left to show, it lands in `Finished` instead. Every other combination is
/// ignored, including everything once `Finished`.
#[must_use]
pub fn transition(state: PlaybackState, command: Command, remaining: usize) -> Transition {
    use Command as C;
    use PlaybackState as S;

    let (to, advanced) = match (state, command) {
        (S::Idle, C::Start) | (S::Paused, C::Resume) => (S::Running, false),
        (S::Idle, C::Step) => (S::Paused, false),
        (S::Running, C::Pause) => (S::Paused, false),
        (S::Running, C::Tick) => (S::Running, remaining > 0),
        (S::Paused, C::Step) => (S::Paused, remaining > 0),
        _ => return Transition::stay(state),
    };

    let left = remaining - usize::from(advanced);
    let to = if left == 0 { S::Finished } else { to };

    Transition {
        from: state,
        to,
        advanced,
    }
}

/// Walks a [`StepSequence`] one step at a time.
///
/// The cursor starts at the first step and never passes the last. Automatic
/// advancement happens through [`tick`](Self::tick), which the host calls with
/// the time elapsed since its previous call.
#[derive(Debug, Clone)]
pub struct Player {
    sequence: StepSequence,
    cursor: usize,
    state: PlaybackState,
    interval: Duration,
    elapsed: Duration,
}

#[allow(clippy::len_without_is_empty)]
impl Player {
    /// Creates an idle player over `sequence` that ticks every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if `interval` is zero.
    pub fn new(sequence: StepSequence, interval: Duration) -> Result<Self, PlaybackConfigError> {
        if interval.is_zero() {
            return Err(PlaybackConfigError::ZeroInterval);
        }
        Ok(Self::with_valid_interval(sequence, interval))
    }

    /// Caller guarantees a non-zero `interval`.
    pub(crate) fn with_valid_interval(sequence: StepSequence, interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            sequence,
            cursor: 0,
            state: PlaybackState::Idle,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    /// Starts auto-advancing.
    pub fn start(&mut self) -> Transition {
        self.apply(Command::Start)
    }

    /// Pauses auto-advancing.
    pub fn pause(&mut self) -> Transition {
        self.apply(Command::Pause)
    }

    /// Resumes auto-advancing after a pause.
    pub fn resume(&mut self) -> Transition {
        self.apply(Command::Resume)
    }

    /// Pauses when running, resumes when paused.
    pub fn toggle_pause(&mut self) -> Transition {
        match self.state {
            PlaybackState::Running => self.pause(),
            PlaybackState::Paused => self.resume(),
            state => Transition::stay(state),
        }
    }

    /// Advances one step by hand.
    ///
    /// Ignored while running and once finished.
    pub fn step(&mut self) -> Transition {
        self.apply(Command::Step)
    }

    /// Feeds elapsed wall time and returns how many steps were advanced.
    ///
    /// Only counts while running. Leftover time below one interval carries
    /// over to the next call and is dropped whenever playback stops running.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        if self.state != PlaybackState::Running {
            return 0;
        }

        self.elapsed += elapsed;
        let mut advanced = 0;
        while self.state == PlaybackState::Running && self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            if self.apply(Command::Tick).advanced {
                advanced += 1;
            }
        }
        advanced
    }

    /// Returns the time until the next automatic advance, if running.
    #[must_use]
    pub fn until_next_tick(&self) -> Option<Duration> {
        (self.state == PlaybackState::Running).then(|| self.interval.saturating_sub(self.elapsed))
    }

    /// Applies a command and updates the cursor and state.
    pub fn apply(&mut self, command: Command) -> Transition {
        let t = transition(self.state, command, self.remaining());
        if t.is_ignored() {
            trace!(?command, state = ?self.state, "ignored playback command");
            return t;
        }

        if t.advanced {
            self.cursor += 1;
        }
        if t.to != PlaybackState::Running {
            self.elapsed = Duration::ZERO;
        }
        self.state = t.to;

        trace!(?command, from = ?t.from, to = ?t.to, cursor = self.cursor, "playback transition");
        if t.to == PlaybackState::Finished {
            debug!(steps = self.sequence.len(), "playback finished");
        }
        t
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Returns the index of the step being shown.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of steps in the sequence. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns the configured tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the step being shown.
    #[must_use]
    pub fn current_step(&self) -> &Step {
        &self.sequence[self.cursor]
    }

    /// Returns the snapshot being shown.
    #[must_use]
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.current_step().snapshot
    }

    /// Returns the pseudo-code line of the step being shown, if any.
    #[must_use]
    pub fn current_source_line(&self) -> Option<usize> {
        self.current_step().source_line
    }

    fn remaining(&self) -> usize {
        self.sequence.last_index() - self.cursor
    }
}
