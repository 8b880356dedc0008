//! Fetch client: the request helper and the fetch wrapper.

use tracing::{debug, warn};
use url::Url;

use crate::config::FetchClientConfig;
use crate::error::FetchError;
use crate::options::RequestOptions;
use crate::outcome::{FetchFailure, FetchResult, FetchSuccess, classify};
use crate::transport::{HttpTransport, ReqwestTransport};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default fetch client using the reqwest transport.
pub type DefaultFetchClient = FetchClient<ReqwestTransport>;

// ============================================================================
// Client
// ============================================================================

/// Issues single HTTP requests and classifies their outcome.
///
/// The client is generic over its transport so tests can substitute a fake.
/// It holds no per-call state and can be shared between tasks.
pub struct FetchClient<T: HttpTransport> {
    transport: T,
}

impl DefaultFetchClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &FetchClientConfig) -> Result<Self, FetchError> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }
}

impl<T: HttpTransport> FetchClient<T> {
    /// Create a client over a custom transport.
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Make a JSON API request.
    ///
    /// Sets `Accept` and `Content-Type` to `application/json` on `options`
    /// (leaving other headers alone) and delegates to [`Self::fetch`].
    pub async fn request(&self, endpoint: &str, options: &mut RequestOptions) -> FetchResult {
        debug!(endpoint, method = %options.method, "Making API request");
        options.apply_json_headers();
        self.fetch(endpoint, options).await
    }

    /// Send one request to `endpoint` and classify the outcome.
    ///
    /// `204 No Content` succeeds without a body parse; any other 2xx body is
    /// parsed as JSON. Non-2xx responses, transport errors and unparsable
    /// bodies come back as a [`FetchFailure`].
    pub async fn fetch(&self, endpoint: &str, options: &RequestOptions) -> FetchResult {
        let url = match Url::parse(endpoint) {
            Ok(url) => url,
            Err(e) => {
                let failure = FetchFailure::Unknown {
                    message: format!("invalid endpoint '{endpoint}': {e}"),
                    status: None,
                };
                warn!(endpoint, error = %failure, "Failed to fetch");
                return Err(failure);
            }
        };

        let result = classify(self.transport.send(&url, options).await);
        log_outcome(endpoint, &result);
        result
    }
}

fn log_outcome(endpoint: &str, result: &FetchResult) {
    match result {
        Ok(FetchSuccess::NoContent(_)) => debug!(endpoint, "Response ok: no content"),
        Ok(FetchSuccess::Json(_)) => debug!(endpoint, "Response ok"),
        Err(failure @ FetchFailure::Network { .. }) => {
            warn!(endpoint, error = %failure, "Failed to fetch, assuming origin error");
        }
        Err(failure) => warn!(
            endpoint,
            status = failure.status_code(),
            error = %failure,
            "Failed to fetch"
        ),
    }
}
