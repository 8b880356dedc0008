//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and mappings
//! from fetch failures to exit codes and user-facing messages.

use textproc_fetch::{FetchError, FetchFailure, TextServiceError};
use thiserror::Error;

use crate::presentation::describe_failure;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error (bad base URL, client setup).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The service could not be reached.
    #[error("{0}")]
    Network(String),

    /// The service answered with an error or something unusable.
    #[error("{0}")]
    Request(String),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Request(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Network(_) => 69,  // EX_UNAVAILABLE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<FetchFailure> for CliError {
    fn from(failure: FetchFailure) -> Self {
        let message = describe_failure(&failure);
        if failure.is_network() {
            Self::Network(message)
        } else {
            Self::Request(message)
        }
    }
}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<TextServiceError> for CliError {
    fn from(err: TextServiceError) -> Self {
        match err {
            TextServiceError::Setup(e) => e.into(),
            TextServiceError::Fetch(failure) => failure.into(),
            TextServiceError::Decode(e) => Self::Request(format!("Unexpected TextService response: {e}")),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
