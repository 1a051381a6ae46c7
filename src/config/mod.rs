//! Configuration management module
//!
//! Optional user settings for diagnostics, read from `fio-summary.toml`
//! in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{FioSummaryError, Result, APP_NAME, CONFIG_FILE};

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Summary settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Default diagnostics level when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

impl SummaryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(FioSummaryError::ConfigError(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Set the default log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Ok(path) => Self::load_from(&path),
            // no config directory on this platform, nothing to read
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            FioSummaryError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            FioSummaryError::ConfigError(msg) => FioSummaryError::ConfigError(format!(
                "Invalid config file {}: {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/fio-summary/fio-summary.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FioSummaryError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::user_friendly_message;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_defaults_are_valid() {
        let config = SummaryConfig::new();
        assert_eq!(config.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        assert!(SummaryConfig::new().with_log_level("debug").validate().is_ok());
        assert!(SummaryConfig::new()
            .with_log_level("verbose")
            .validate()
            .is_err());
    }

    #[test]
    fn test_toml_partial_settings() {
        let config = SummaryConfig::from_toml_str("").unwrap();
        assert_eq!(config, SummaryConfig::default());

        // formatting keys are not settings
        let config = SummaryConfig::from_toml_str("precision = 0\n").unwrap();
        assert_eq!(config, SummaryConfig::default());
    }

    #[test]
    fn test_toml_errors() {
        assert!(matches!(
            SummaryConfig::from_toml_str("log_level = 3"),
            Err(FioSummaryError::ConfigError(_))
        ));
        assert!(matches!(
            SummaryConfig::from_toml_str("log_level = \"loud\""),
            Err(FioSummaryError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let config = SummaryConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, SummaryConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = SummaryConfig::load_from(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_from_invalid_file_message() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"loud\"").unwrap();

        let err = SummaryConfig::load_from(file.path()).unwrap_err();
        let msg = user_friendly_message(&err);
        assert_eq!(msg.matches("Configuration error").count(), 1);
        assert!(msg.contains("Invalid config file"));
        assert!(msg.contains("Unknown log level 'loud'"));
    }

    #[test]
    fn test_config_file_path() {
        if let Ok(path) = SummaryConfig::config_file_path() {
            assert!(path.to_string_lossy().contains("fio-summary"));
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
