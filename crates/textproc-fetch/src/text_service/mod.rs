//! Typed client for the TextService generator endpoints.

mod query;
mod url;

pub use query::{GenerateKind, GenerateQuery, Gender};

use ::url::Url;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::client::FetchClient;
use crate::config::FetchClientConfig;
use crate::error::TextServiceError;
use crate::options::RequestOptions;
use crate::outcome::FetchSuccess;
use crate::transport::{HttpTransport, ReqwestTransport};

use self::url::{build_generate_url, build_pattern_url};

/// Default TextService client using the reqwest transport.
pub type DefaultTextServiceClient = TextServiceClient<ReqwestTransport>;

/// Client for the TextService REST resource.
///
/// Every endpoint answers with a JSON array of generated strings.
pub struct TextServiceClient<T: HttpTransport> {
    fetch: FetchClient<T>,
    base_url: Url,
}

impl DefaultTextServiceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &FetchClientConfig) -> Result<Self, TextServiceError> {
        let base_url = config.parsed_base_url()?;
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(base_url, transport))
    }
}

impl<T: HttpTransport> TextServiceClient<T> {
    /// Create a client over a custom transport.
    pub const fn with_transport(base_url: Url, transport: T) -> Self {
        Self {
            fetch: FetchClient::with_transport(transport),
            base_url,
        }
    }

    /// Base URL every endpoint is resolved against.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub const fn fetch_client(&self) -> &FetchClient<T> {
        &self.fetch
    }

    /// Generate items of one kind.
    pub async fn generate(&self, query: &GenerateQuery) -> Result<Vec<String>, TextServiceError> {
        let url = build_generate_url(&self.base_url, query);
        debug!(kind = %query.kind, count = query.effective_count(), "Generating text");

        let success = self
            .fetch
            .request(url.as_str(), &mut RequestOptions::new())
            .await?;
        decode_lines(success)
    }

    /// Generate `count` items from a part-of-speech pattern.
    ///
    /// The pattern is posted as plain text, which is what the endpoint
    /// consumes, so this bypasses the JSON request helper.
    pub async fn generate_from_pattern(
        &self,
        pattern: &str,
        count: u32,
    ) -> Result<Vec<String>, TextServiceError> {
        let url = build_pattern_url(&self.base_url, count);
        debug!(pattern, count, "Generating text from pattern");

        let options = RequestOptions::new()
            .with_method(Method::POST)
            .with_header(ACCEPT, HeaderValue::from_static("application/json"))
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .with_body(pattern);

        let success = self.fetch.fetch(url.as_str(), &options).await?;
        decode_lines(success)
    }
}

/// Decode a generator response. No content and `null` both mean nothing was
/// generated.
fn decode_lines(success: FetchSuccess) -> Result<Vec<String>, TextServiceError> {
    match success.into_json() {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}
