//! CLI error handling
//!
//! An unavailable advanced metric is part of a normal report. Only problems
//! that stop the program from producing a report at all end up here.

use bmi_plus_shared::Unavailable;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot calculate: {0}")]
    Incomplete(#[from] Unavailable),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
