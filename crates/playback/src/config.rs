//! TOML configuration for a [`Session`].
//!
//! Every section is optional and falls back to its default. Unknown keys are
//! rejected so typos surface as errors instead of being silently ignored.
//!
//! ```toml
//! seed = 42
//!
//! [array]
//! size = 50
//! min_value = 5
//! max_value = 100
//!
//! [playback]
//! algorithm = "merge"
//! interval_ms = 100
//! source_lines = false
//! highlight_runs = true
//!
//! [palette]
//! default = "#3b82f6"
//! comparing = "#ef4444"
//! sorted = "#22c55e"
//! pivot = "#f59e42"
//! left_run = "#3b82f6"
//! right_run = "#f59e42"
//! merged = "#a3e635"
//! ```
//!
//! A `[palette]` table replaces the default palette as a whole, so it must
//! list all seven states.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use sortscope_core::Palette;
use sortscope_sorters::{Algorithm, Options};
use thiserror::Error;
use tracing::debug;

use crate::{ArrayConfig, ArrayConfigError, DEFAULT_INTERVAL, PlaybackConfigError, Session};

/// Errors that can occur when loading a [`SessionConfig`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid array config")]
    Array(#[from] ArrayConfigError),

    #[error("invalid playback config")]
    Playback(#[from] PlaybackConfigError),
}

/// Top-level session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Seed for array generation. Entropy is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub array: ArraySection,
    pub playback: PlaybackSection,
    pub palette: Palette<String>,
}

/// The `[array]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArraySection {
    pub size: usize,
    pub min_value: u32,
    pub max_value: u32,
}

impl Default for ArraySection {
    fn default() -> Self {
        let array = ArrayConfig::default();
        Self {
            size: array.size(),
            min_value: array.min_value(),
            max_value: array.max_value(),
        }
    }
}

/// The `[playback]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackSection {
    pub algorithm: Algorithm,
    pub interval_ms: u64,
    pub source_lines: bool,
    pub highlight_runs: bool,
}

impl Default for PlaybackSection {
    fn default() -> Self {
        let options = Options::default();
        Self {
            algorithm: Algorithm::default(),
            interval_ms: u64::try_from(DEFAULT_INTERVAL.as_millis()).unwrap_or(u64::MAX),
            source_lines: options.source_lines,
            highlight_runs: options.highlight_runs,
        }
    }
}

impl SessionConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, contains unknown keys,
    /// or fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded session config");
        Ok(config)
    }

    /// Checks the array range and the tick interval.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), Error> {
        self.array_config()?;
        self.interval()?;
        Ok(())
    }

    /// Returns the validated array config.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_value > max_value`.
    pub fn array_config(&self) -> Result<ArrayConfig, ArrayConfigError> {
        let ArraySection {
            size,
            min_value,
            max_value,
        } = self.array;
        ArrayConfig::new(size, min_value, max_value)
    }

    /// Returns the generator options.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            source_lines: self.playback.source_lines,
            highlight_runs: self.playback.highlight_runs,
        }
    }

    /// Returns the validated tick interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `interval_ms` is zero.
    pub fn interval(&self) -> Result<Duration, PlaybackConfigError> {
        match self.playback.interval_ms {
            0 => Err(PlaybackConfigError::ZeroInterval),
            ms => Ok(Duration::from_millis(ms)),
        }
    }

    /// Builds a session from this config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid.
    pub fn into_session(self) -> Result<Session, Error> {
        let session = Session::new(self.array_config()?, self.seed)
            .with_algorithm(self.playback.algorithm)
            .with_options(self.options())
            .with_interval(self.interval()?)?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r##"
seed = 42

[array]
size = 12
min_value = 1
max_value = 9

[playback]
algorithm = "merge"
interval_ms = 250
source_lines = true
highlight_runs = false

[palette]
default = "#000000"
comparing = "#111111"
sorted = "#222222"
pivot = "#333333"
left_run = "#444444"
right_run = "#555555"
merged = "#666666"
"##;

    #[test]
    fn parses_full_config() {
        let config = SessionConfig::from_toml_str(FULL).unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.array_config().unwrap(), ArrayConfig::new(12, 1, 9).unwrap());
        assert_eq!(config.playback.algorithm, Algorithm::Merge);
        assert_eq!(config.interval().unwrap(), Duration::from_millis(250));
        assert_eq!(config.options(), Options::plain().with_source_lines());
        assert_eq!(config.palette.merged, "#666666");
    }

    #[test]
    fn empty_text_is_default() {
        let config = SessionConfig::from_toml_str("").unwrap();

        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.array_config().unwrap(), ArrayConfig::default());
        assert_eq!(config.interval().unwrap(), DEFAULT_INTERVAL);
        assert_eq!(config.options(), Options::default());
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config = SessionConfig::from_toml_str(
            r#"
[array]
size = 8

[playback]
algorithm = "quick"
"#,
        )
        .unwrap();

        assert_eq!(config.array.size, 8);
        assert_eq!(config.array.min_value, 5);
        assert_eq!(config.array.max_value, 100);
        assert_eq!(config.playback.algorithm, Algorithm::Quick);
        assert_eq!(config.interval().unwrap(), DEFAULT_INTERVAL);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = SessionConfig::from_toml_str("[array]\nlength = 3\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));

        let err = SessionConfig::from_toml_str("speed = 3\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        let err = SessionConfig::from_toml_str("[playback]\nalgorithm = \"bogo\"\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn rejects_inverted_range() {
        let err =
            SessionConfig::from_toml_str("[array]\nmin_value = 10\nmax_value = 2\n").unwrap_err();

        assert!(matches!(
            err,
            Error::Array(ArrayConfigError::EmptyRange { min: 10, max: 2 })
        ));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = SessionConfig::from_toml_str("[playback]\ninterval_ms = 0\n").unwrap_err();

        assert!(matches!(
            err,
            Error::Playback(PlaybackConfigError::ZeroInterval)
        ));
    }

    #[test]
    fn builds_session() {
        let session = SessionConfig::from_toml_str(FULL)
            .unwrap()
            .into_session()
            .unwrap();

        assert_eq!(session.values().len(), 12);
        assert!(session.values().iter().all(|v| (1..=9).contains(v)));
        assert_eq!(session.algorithm(), Algorithm::Merge);
        assert!(session.options().source_lines);
    }

    #[test]
    fn seed_makes_sessions_repeatable() {
        let a = SessionConfig::from_toml_str(FULL).unwrap().into_session().unwrap();
        let b = SessionConfig::from_toml_str(FULL).unwrap().into_session().unwrap();

        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn serializes_back_to_toml() {
        let config = SessionConfig::from_toml_str(FULL).unwrap();
        let text = toml::to_string(&config).unwrap();

        assert_eq!(SessionConfig::from_toml_str(&text).unwrap(), config);
    }
}
