//! Public configuration for the fetch and TextService clients.

use url::Url;

use crate::error::FetchError;

/// Base URL of the TextService REST resource.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/text-processing/rest/TextService";

/// Configuration for the fetch client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use textproc_fetch::FetchClientConfig;
///
/// let config = FetchClientConfig::new()
///     .with_base_url("http://text.example:8010/text-service/rest/TextService")
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct FetchClientConfig {
    /// Base URL for the TextService endpoints
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for FetchClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("textproc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the TextService endpoints.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Parse the configured base URL.
    ///
    /// Only hierarchical `http`/`https` URLs are accepted; anything else
    /// would produce endpoints reqwest refuses to send.
    pub(crate) fn parsed_base_url(&self) -> Result<Url, FetchError> {
        let url = Url::parse(&self.base_url).map_err(|source| FetchError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedBaseUrl {
                url: self.base_url.clone(),
                scheme: url.scheme().to_string(),
            });
        }
        Ok(url)
    }
}
