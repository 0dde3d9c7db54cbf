//! Error types for the geoid lookup crate.

use thiserror::Error;

/// Errors that can occur when looking up a geoid height.
#[derive(Debug, Error)]
pub enum GeoidError {
    /// HTTP transport error (DNS, connection refused, timeout, body read).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The form service answered with a non-success status.
    #[error("Geoid service returned HTTP {status}")]
    HttpStatus {
        /// Status code returned by the service.
        status: u16,
    },

    /// The response did not contain a height.
    #[error("No geoid height found in service response")]
    NoData,

    /// The response contained a height field that is not a number.
    #[error("Malformed geoid height in service response: {text:?}")]
    MalformedHeight {
        /// The captured text.
        text: String,
    },

    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

impl GeoidError {
    /// Whether the service could not be reached at all.
    ///
    /// Distinguishes "service unreachable" from "service said nothing useful".
    pub fn is_transport(&self) -> bool {
        matches!(self, GeoidError::Transport(_) | GeoidError::HttpStatus { .. })
    }
}
