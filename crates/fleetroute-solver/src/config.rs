//! Engine configuration.
//!
//! Load engine configuration from TOML to control the loop cadence and
//! publishing behavior without code changes:
//!
//! ```
//! use fleetroute_solver::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     step_delay_millis = 50
//!     publish_after_change = false
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.step_delay_millis, 50);
//! assert!(!config.publish_after_change);
//! ```
//!
//! Use defaults when no file exists:
//!
//! ```
//! use fleetroute_solver::EngineConfig;
//!
//! let config = EngineConfig::load("engine.toml").unwrap_or_default();
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the background optimizer loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How long the loop waits for new fact changes per iteration.
    pub step_delay_millis: u64,
    /// Publish a fresh snapshot after every applied change batch.
    pub publish_after_change: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_delay_millis: 20,
            publish_after_change: true,
        }
    }
}

impl EngineConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// The loop's per-iteration wait as a [`Duration`].
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = EngineConfig::from_toml_str("step_delay_millis = 5").unwrap();

        assert_eq!(config.step_delay(), Duration::from_millis(5));
        assert!(config.publish_after_change);
    }

    #[test]
    fn empty_input_is_the_default_config() {
        assert_eq!(
            EngineConfig::from_toml_str("").unwrap(),
            EngineConfig::default()
        );
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("step_delay_millis = \"fast\"").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EngineConfig::load("does-not-exist.toml").unwrap_err();

        assert!(matches!(err, ConfigError::Io(_)));
    }
}
