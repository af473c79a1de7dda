//! Configuration system for hillclimb.
//!
//! Load solver configuration from TOML or YAML files to control the random
//! seed, termination limits and the hill-climbing round length without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use hillclimb_config::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 42
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     round_count_limit = 10000
//!
//!     [hill_climbing]
//!     round_length_factor = 3
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.random_seed, Some(42));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use hillclimb_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of successor requests per queen in one round.
pub const DEFAULT_ROUND_LENGTH_FACTOR: usize = 3;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration. Absent means search until solved.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Hill-climbing configuration.
    #[serde(default)]
    pub hill_climbing: HillClimbingConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks values that parse but cannot drive a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hill_climbing.round_length_factor == 0 {
            return Err(ConfigError::Invalid(
                "hill_climbing.round_length_factor must be greater than zero".to_string(),
            ));
        }
        if let Some(termination) = &self.termination {
            if termination.total_seconds().is_none() {
                return Err(ConfigError::Invalid(
                    "termination time limit does not fit in u64 seconds".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the maximum number of outer rounds.
    pub fn with_round_count_limit(mut self, rounds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            round_count_limit: Some(rounds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the number of successor requests per queen in one round.
    pub fn with_round_length_factor(mut self, factor: usize) -> Self {
        self.hill_climbing.round_length_factor = factor;
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillclimb_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// let config = SolverConfig::from_toml_str(r#"
    ///     [termination]
    ///     minutes_spent_limit = 1
    ///     seconds_spent_limit = 30
    /// "#).unwrap();
    ///
    /// assert_eq!(config.time_limit(), Some(Duration::from_secs(90)));
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Termination configuration.
///
/// Every limit is optional. Limits combine with OR: the first one reached
/// stops an unsolved search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum number of outer hill-climbing rounds.
    pub round_count_limit: Option<u64>,

    /// Maximum number of accepted successor moves.
    pub step_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// A total too large for `u64` seconds saturates; [`SolverConfig::validate`]
    /// rejects it.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds = self.total_seconds().unwrap_or(u64::MAX);
        if seconds > 0 {
            Some(Duration::from_secs(seconds))
        } else {
            None
        }
    }

    // Seconds plus minutes, or None on overflow.
    fn total_seconds(&self) -> Option<u64> {
        self.minutes_spent_limit
            .unwrap_or(0)
            .checked_mul(60)?
            .checked_add(self.seconds_spent_limit.unwrap_or(0))
    }

    /// Returns true if no limit is set.
    pub fn is_unbounded(&self) -> bool {
        self.time_limit().is_none()
            && self.round_count_limit.is_none()
            && self.step_count_limit.is_none()
    }
}

/// Hill-climbing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HillClimbingConfig {
    /// Successor requests per unit of problem size in one round.
    #[serde(default = "default_round_length_factor")]
    pub round_length_factor: usize,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            round_length_factor: DEFAULT_ROUND_LENGTH_FACTOR,
        }
    }
}

fn default_round_length_factor() -> usize {
    DEFAULT_ROUND_LENGTH_FACTOR
}
