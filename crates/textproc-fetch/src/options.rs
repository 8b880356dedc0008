//! Request options: method, headers and body for a single call.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

const APPLICATION_JSON: &str = "application/json";

/// Options for one HTTP request.
///
/// Mirrors the `{ method, headers, body }` shape generic HTTP clients accept.
/// The header map always exists; an empty map means "no caller headers".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method, `GET` unless set.
    pub method: Method,
    /// Request headers.
    pub headers: HeaderMap,
    /// Optional request body, sent verbatim.
    pub body: Option<String>,
}

impl RequestOptions {
    /// Create empty `GET` options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add or replace a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON request body.
    pub fn with_json_body<T: Serialize + ?Sized>(self, value: &T) -> serde_json::Result<Self> {
        let body = serde_json::to_string(value)?;
        Ok(self.with_body(body))
    }

    /// Set `Accept` and `Content-Type` to `application/json`.
    ///
    /// Only those two headers are overwritten; every other header is kept.
    pub fn apply_json_headers(&mut self) {
        let json = HeaderValue::from_static(APPLICATION_JSON);
        self.headers.insert(ACCEPT, json.clone());
        self.headers.insert(CONTENT_TYPE, json);
    }
}
