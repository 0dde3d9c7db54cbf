//! Error types for the command-line front end.

use thiserror::Error;

/// Errors that stop the command before a height can be printed.
#[derive(Debug, Error)]
pub enum CliError {
    /// The client could not be set up.
    #[error(transparent)]
    Geoid(#[from] geoid_calc::GeoidError),

    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither a coordinate nor `--check-reference` was given.
    #[error("a latitude and longitude are required")]
    MissingCoordinate,
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
