use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg64;
use sortscope_core::{Snapshot, VisualState};
use sortscope_sorters::{Algorithm, Options};
use tracing::debug;

use crate::array::{ArrayConfig, generate_values};
use crate::{DEFAULT_INTERVAL, PlaybackConfigError, PlaybackState, Player, Transition};

/// Whether a session request took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request changed the session.
    Applied,

    /// The request arrived while a run was in progress.
    Ignored,
}

impl Outcome {
    /// Returns `true` if the request took effect.
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// The user-facing controls of the visualizer.
///
/// A session owns the current input array and at most one run. While the
/// run auto-plays, regenerating, switching algorithms, and changing options
/// are ignored. Once paused or finished, any of those requests discards the
/// run. A finished run stays on screen until a request replaces it.
#[derive(Debug)]
pub struct Session {
    array: ArrayConfig,
    rng: Pcg64,
    values: Vec<u32>,
    idle: Snapshot,
    algorithm: Algorithm,
    options: Options,
    interval: Duration,
    run: Option<Player>,
}

impl Session {
    /// Creates a session and generates its first array.
    ///
    /// With a `seed`, the sequence of generated arrays is reproducible.
    #[must_use]
    pub fn new(array: ArrayConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        };

        let mut session = Self {
            array,
            rng,
            values: Vec::new(),
            idle: Snapshot::default(),
            algorithm: Algorithm::default(),
            options: Options::default(),
            interval: DEFAULT_INTERVAL,
            run: None,
        };
        session.fill();
        session
    }

    /// Sets the initial algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the initial generator options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Sets the tick interval used by new runs.
    ///
    /// # Errors
    ///
    /// Returns an error if `interval` is zero.
    pub fn with_interval(mut self, interval: Duration) -> Result<Self, PlaybackConfigError> {
        if interval.is_zero() {
            return Err(PlaybackConfigError::ZeroInterval);
        }
        self.interval = interval;
        Ok(self)
    }

    /// Replaces the input array with freshly drawn values.
    pub fn regenerate(&mut self) -> Outcome {
        if self.is_running() {
            debug!("regenerate ignored while running");
            return Outcome::Ignored;
        }
        self.fill();
        Outcome::Applied
    }

    /// Chooses the algorithm for the next run.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Outcome {
        if self.is_running() {
            debug!(%algorithm, "algorithm switch ignored while running");
            return Outcome::Ignored;
        }
        self.algorithm = algorithm;
        self.run = None;
        Outcome::Applied
    }

    /// Changes the generator options for the next run.
    pub fn set_options(&mut self, options: Options) -> Outcome {
        if self.is_running() {
            debug!("option change ignored while running");
            return Outcome::Ignored;
        }
        self.options = options;
        self.run = None;
        Outcome::Applied
    }

    /// Starts a run, or resumes the current one if it is paused.
    ///
    /// Starting generates the complete step sequence for the current input
    /// before anything is shown. Ignored while already running.
    pub fn start(&mut self) -> Transition {
        if let Some(player) = self.run.as_mut() {
            match player.state() {
                PlaybackState::Paused => return player.resume(),
                PlaybackState::Running => return player.start(),
                PlaybackState::Idle | PlaybackState::Finished => {}
            }
        }
        self.begin().start()
    }

    /// Pauses the current run.
    pub fn pause(&mut self) -> Transition {
        self.with_run(Player::pause)
    }

    /// Resumes a paused run.
    pub fn resume(&mut self) -> Transition {
        self.with_run(Player::resume)
    }

    /// Pauses when running, resumes when paused.
    pub fn toggle_pause(&mut self) -> Transition {
        self.with_run(Player::toggle_pause)
    }

    /// Advances the current run by one step.
    ///
    /// Without a run, this prepares a new run paused on its first step.
    /// Ignored while running and once the run has finished.
    pub fn next_step(&mut self) -> Transition {
        match self.run.as_mut() {
            Some(player) => player.step(),
            None => self.begin().step(),
        }
    }

    /// Feeds elapsed wall time to the current run.
    ///
    /// Returns the number of steps advanced.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        self.run.as_mut().map_or(0, |player| player.tick(elapsed))
    }

    /// Returns the time until the next automatic advance, if running.
    #[must_use]
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.run.as_ref().and_then(Player::until_next_tick)
    }

    /// Returns the snapshot to display.
    ///
    /// Before any run this is the input array with every element default.
    #[must_use]
    pub fn current_snapshot(&self) -> &Snapshot {
        self.run
            .as_ref()
            .map_or(&self.idle, Player::current_snapshot)
    }

    /// Returns the pseudo-code line of the displayed step, if any.
    #[must_use]
    pub fn current_source_line(&self) -> Option<usize> {
        self.run.as_ref().and_then(Player::current_source_line)
    }

    /// Returns the pseudo-code for the selected algorithm, if it has any.
    #[must_use]
    pub fn pseudo_code(&self) -> Option<&'static [&'static str]> {
        self.algorithm.pseudo_code()
    }

    /// Returns the playback state, `Idle` when there is no run.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.run
            .as_ref()
            .map_or(PlaybackState::Idle, Player::state)
    }

    /// Returns `true` while steps auto-advance.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == PlaybackState::Running
    }

    /// Returns the current run, if any.
    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        self.run.as_ref()
    }

    /// Returns the current input values.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Returns the array configuration.
    #[must_use]
    pub fn array_config(&self) -> &ArrayConfig {
        &self.array
    }

    /// Returns the selected algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the generator options.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    fn fill(&mut self) {
        self.values = generate_values(&self.array, &mut self.rng);
        self.idle = Snapshot::uniform(&self.values, VisualState::Default);
        self.run = None;
        debug!(len = self.values.len(), "generated new array");
    }

    /// Generates the sequence for a new run and installs an idle player.
    fn begin(&mut self) -> &mut Player {
        let sequence = self.algorithm.generate(&self.values, &self.options);
        debug!(
            algorithm = %self.algorithm,
            len = self.values.len(),
            steps = sequence.len(),
            "starting run"
        );

        // Checked in `with_interval`.
        self.run.insert(Player::with_valid_interval(sequence, self.interval))
    }

    fn with_run<F>(&mut self, f: F) -> Transition
    where
        F: FnOnce(&mut Player) -> Transition,
    {
        match self.run.as_mut() {
            Some(player) => f(player),
            None => Transition::stay(PlaybackState::Idle),
        }
    }
}
