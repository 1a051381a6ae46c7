//! fio-summary - fio report summarizer
//!
//! Reads the plain-text report written by `fio`, picks out per-job
//! bandwidth and IOPS lines plus the aggregate bandwidth lines, and
//! reduces them to mean/standard deviation figures per direction.

use std::fmt;
use std::path::{Path, PathBuf};

pub mod config;
pub mod extract;
pub mod filter;
pub mod input;
pub mod report;

use report::RunReport;

// Common error types
#[derive(Debug)]
pub enum FioSummaryError {
    /// Input path is missing or is not a regular file
    FileNotFound(PathBuf),
    /// I/O operation failed while reading the report
    IoError(std::io::Error),
    /// A token carried the field name but not a parsable value
    MalformedValue {
        /// Field that was being scanned for (`iops`, `bw`, `aggrb`)
        field: &'static str,
        /// The offending whitespace-separated token
        token: String,
    },
    /// Settings file could not be read or validated
    ConfigError(String),
}

impl fmt::Display for FioSummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FioSummaryError::FileNotFound(path) => {
                write!(f, "Cannot find file {}", path.display())
            }
            FioSummaryError::IoError(err) => write!(f, "I/O error: {}", err),
            FioSummaryError::MalformedValue { field, token } => {
                write!(f, "Malformed {} value in token '{}'", field, token)
            }
            FioSummaryError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for FioSummaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FioSummaryError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FioSummaryError {
    fn from(err: std::io::Error) -> Self {
        FioSummaryError::IoError(err)
    }
}

impl From<toml::de::Error> for FioSummaryError {
    fn from(err: toml::de::Error) -> Self {
        FioSummaryError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for fio-summary operations
pub type Result<T> = std::result::Result<T, FioSummaryError>;

/// Error handling utilities
pub mod error {
    use super::FioSummaryError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &FioSummaryError) -> String {
        match error {
            FioSummaryError::FileNotFound(path) => format!(
                "Cannot find file {}. Check the path passed to --file.",
                path.display()
            ),
            FioSummaryError::IoError(err) if err.kind() == std::io::ErrorKind::InvalidData => {
                format!("Report is not valid UTF-8 text: {}", err)
            }
            FioSummaryError::MalformedValue { field, token } => format!(
                "Unexpected {} token '{}'. Only fio's '{}=<value>,' shape is supported.",
                field, token, field
            ),
            FioSummaryError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "fio-summary";
pub const CONFIG_FILE: &str = "fio-summary.toml";

/// Load a report from disk and build its summary
pub fn summarize_file(path: &Path) -> Result<RunReport> {
    let lines = input::load_lines(path)?;
    RunReport::from_lines(&lines)
}

/// Load, summarize and render a report in one call
pub fn run(path: &Path) -> Result<Vec<String>> {
    let report = summarize_file(path)?;
    Ok(report.render())
}
