//! Configuration file structures for fibseq.
//!
//! This module defines structures for TOML configuration files:
//! - [`ConfigFile`]: Top-level configuration file structure
//! - [`LoggingConfig`]: Log filter settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::RunConfig;

/// Top-level configuration file structure.
///
/// # Example
///
/// ```toml
/// [run.sequence]
/// seed_previous = 1
/// seed_next = 0
///
/// [run.driver]
/// iterations = 7
///
/// [logging]
/// filter = "warn,fibseq_core=debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Generator and driver configuration.
    #[serde(default)]
    pub run: RunConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigFileError::Io {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content).map_err(|e| ConfigFileError::Parse {
            message: e.to_string(),
        })
    }
}

/// Logging configuration from config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "defaults::filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: defaults::filter(),
        }
    }
}

/// Configuration file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config file: {message}")]
    Parse { message: String },
}

mod defaults {
    pub fn filter() -> String {
        "warn".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file() {
        let config = ConfigFile::default();

        assert_eq!(config.run, RunConfig::default());
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ConfigFile::from_toml("").unwrap();

        assert_eq!(config.run.driver.iterations, 7);
        assert_eq!(config.run.sequence.seed(), (1, 0));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [run.sequence]
            seed_previous = 0
            seed_next = 2

            [run.driver]
            iterations = 4

            [logging]
            filter = "debug"
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(config.run.sequence.seed(), (0, 2));
        assert_eq!(config.run.driver.iterations, 4);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid = "this is not valid toml [";
        let result = ConfigFile::from_toml(invalid);
        assert!(matches!(result, Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn test_negative_iterations_rejected() {
        let toml = r#"
            [run.driver]
            iterations = -1
        "#;
        assert!(ConfigFile::from_toml(toml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigFile::from_file("/nonexistent/fibseq.toml").unwrap_err();
        assert!(matches!(err, ConfigFileError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/fibseq.toml"));
    }
}
