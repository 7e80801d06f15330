use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sortscope_core::{Event, Observer, StepSequence};
use thiserror::Error;

use crate::{Options, bubble, insertion, merge, quick, selection};

/// The sorting algorithms sortscope can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
}

/// Error returned when parsing an unrecognized algorithm name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown algorithm `{0}`, expected one of: bubble, selection, insertion, quick, merge")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Returns the short, lowercase name used in config files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    /// Returns the human-readable name, e.g. "Bubble Sort".
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Returns the pseudo-code that `source_line` indexes into, if this
    /// algorithm emits line markers.
    #[must_use]
    pub fn pseudo_code(self) -> Option<&'static [&'static str]> {
        match self {
            Algorithm::Bubble => Some(&bubble::PSEUDO_CODE),
            _ => None,
        }
    }

    /// Generates the full step sequence for `values`.
    #[must_use]
    pub fn generate(self, values: &[u32], options: &Options) -> StepSequence {
        self.generate_observed(values, options, ())
    }

    /// Generates the full step sequence for `values`, reporting each step to
    /// `observer`.
    pub fn generate_observed<Obs>(
        self,
        values: &[u32],
        options: &Options,
        observer: Obs,
    ) -> StepSequence
    where
        Obs: for<'a> Observer<Event<'a>>,
    {
        match self {
            Algorithm::Bubble => bubble::steps_observed(values, options, observer),
            Algorithm::Selection => selection::steps_observed(values, options, observer),
            Algorithm::Insertion => insertion::steps_observed(values, options, observer),
            Algorithm::Quick => quick::steps_observed(values, options, observer),
            Algorithm::Merge => merge::steps_observed(values, options, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}
