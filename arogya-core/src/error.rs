//! Error types for the Arogya scheduler.

use thiserror::Error;

/// Errors that can occur in scheduling, export and configuration.
#[derive(Error, Debug)]
pub enum ArogyaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Unknown timezone '{0}'. Expected one of: ET, CT, MT, PT")]
    UnknownTimezone(String),

    #[error("Weekly template error: {0}")]
    Template(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Arogya operations.
pub type ArogyaResult<T> = Result<T, ArogyaError>;
