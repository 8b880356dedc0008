//! Error types for client setup and the TextService client.
//!
//! Per-request failures are not errors in this sense; they are classified
//! into [`FetchFailure`](crate::FetchFailure) by the fetch wrapper.

use thiserror::Error;

use crate::outcome::FetchFailure;

/// Errors raised while constructing a client.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The URL as configured
        url: String,
        /// Parser error
        source: url::ParseError,
    },

    /// The configured base URL parses but cannot address an HTTP service,
    /// e.g. `localhost:8080` (read as scheme `localhost`) or `mailto:`.
    #[error("Invalid base URL '{url}': expected an absolute http or https URL, got scheme '{scheme}'")]
    UnsupportedBaseUrl {
        /// The URL as configured
        url: String,
        /// Scheme the parser found
        scheme: String,
    },
}

/// Errors returned by [`TextServiceClient`](crate::TextServiceClient) calls.
#[derive(Debug, Error)]
pub enum TextServiceError {
    /// Client construction failed.
    #[error(transparent)]
    Setup(#[from] FetchError),

    /// The request itself failed (network, HTTP status, or unknown).
    #[error(transparent)]
    Fetch(#[from] FetchFailure),

    /// The service answered with JSON that is not a list of strings.
    #[error("Unexpected TextService response: {0}")]
    Decode(#[from] serde_json::Error),
}
