#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod callbacks;
mod client;
mod config;
mod error;
mod options;
mod outcome;
mod text_service;
mod transport;

// ============================================================================
// Public API
// ============================================================================

// Fetch wrapper
pub use callbacks::Callbacks;
pub use client::{DefaultFetchClient, FetchClient};
pub use options::RequestOptions;
pub use outcome::{ErrorBody, FailureKind, FetchFailure, FetchResult, FetchSuccess};
pub use transport::{Exchange, HttpTransport, RawResponse, ReqwestTransport};

// TextService
pub use text_service::{DefaultTextServiceClient, GenerateKind, GenerateQuery, Gender, TextServiceClient};

// Configuration and errors
pub use config::{DEFAULT_BASE_URL, FetchClientConfig};
pub use error::{FetchError, TextServiceError};

// HTTP vocabulary used in `RequestOptions`
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
pub use reqwest::{Method, StatusCode};

/// Test doubles for code that depends on an [`HttpTransport`].
#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    pub use crate::transport::testing::*;
}

// Silence unused dev-dependency warnings (axum is used by integration tests)
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio as _;
