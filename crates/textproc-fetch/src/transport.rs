//! HTTP transport abstraction.
//!
//! A transport performs exactly one exchange and reports it as a tagged
//! [`Exchange`], so callers never have to inspect error values to work out
//! whether a server was reached. The production implementation uses reqwest.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use url::Url;

use crate::config::FetchClientConfig;
use crate::error::FetchError;
use crate::options::RequestOptions;

// ============================================================================
// Exchange
// ============================================================================

/// A fully received HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    /// `true` for statuses in the 200-299 range.
    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }
}

/// What happened when a request was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    /// A response with a 2xx status.
    Ok(RawResponse),
    /// No response was received (DNS, refused connection, reset, TLS, ...).
    TransportError(String),
    /// A response with a non-2xx status.
    HttpError(RawResponse),
    /// The status line arrived but the body could not be read in full.
    IncompleteBody {
        status: StatusCode,
        message: String,
    },
}

impl Exchange {
    /// Tag a received response by its status.
    pub fn from_response(response: RawResponse) -> Self {
        if response.is_ok() {
            Self::Ok(response)
        } else {
            Self::HttpError(response)
        }
    }
}

// ============================================================================
// Transport Trait
// ============================================================================

/// Trait for transports that can perform one HTTP exchange.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `options` to `endpoint` and report the exchange.
    async fn send(&self, endpoint: &Url, options: &RequestOptions) -> Exchange;
}

// ============================================================================
// Reqwest Transport
// ============================================================================

/// Production transport using reqwest.
///
/// Any error from `send()` means no response was received, which is reqwest's
/// contract for transport failures. Redirects are followed by reqwest itself.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport with the given configuration.
    pub fn new(config: &FetchClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    fn build_request(&self, endpoint: &Url, options: &RequestOptions) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .request(options.method.clone(), endpoint.clone())
            .headers(options.headers.clone());
        if let Some(ref body) = options.body {
            request = request.body(body.clone());
        }
        request
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, endpoint: &Url, options: &RequestOptions) -> Exchange {
        let response = match self.build_request(endpoint, options).send().await {
            Ok(response) => response,
            Err(e) => return Exchange::TransportError(e.to_string()),
        };

        let status = response.status();
        let headers = response.headers().clone();

        match response.bytes().await {
            Ok(body) => Exchange::from_response(RawResponse {
                status,
                headers,
                body,
            }),
            Err(e) => Exchange::IncompleteBody {
                status,
                message: format!("failed to read response body: {e}"),
            },
        }
    }
}

// ============================================================================
// Fake Transport for Testing
// ============================================================================

#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// A request seen by [`FakeTransport`].
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub url: Url,
        pub options: RequestOptions,
    }

    /// A fake transport that returns canned exchanges.
    ///
    /// Routes are matched in insertion order by URL substring. Unmatched URLs
    /// fail as if the connection had been refused.
    pub struct FakeTransport {
        routes: Mutex<Vec<(String, Exchange)>>,
        default_exchange: Option<Exchange>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl FakeTransport {
        /// Create a new fake transport.
        pub fn new() -> Self {
            Self {
                routes: Mutex::new(Vec::new()),
                default_exchange: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Add a canned exchange for URLs containing `url_contains`.
        pub fn with_exchange(self, url_contains: &str, exchange: Exchange) -> Self {
            self.routes
                .lock()
                .unwrap()
                .push((url_contains.to_string(), exchange));
            self
        }

        /// Set the exchange for URLs that don't match any route.
        pub fn with_default(mut self, exchange: Exchange) -> Self {
            self.default_exchange = Some(exchange);
            self
        }

        /// Every request sent so far, oldest first.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn find_exchange(&self, url: &str) -> Option<Exchange> {
            {
                let routes = self.routes.lock().unwrap();
                for (pattern, exchange) in routes.iter() {
                    if url.contains(pattern.as_str()) {
                        return Some(exchange.clone());
                    }
                }
            }
            self.default_exchange.clone()
        }
    }

    impl Default for FakeTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpTransport for FakeTransport {
        async fn send(&self, endpoint: &Url, options: &RequestOptions) -> Exchange {
            self.requests.lock().unwrap().push(RecordedRequest {
                url: endpoint.clone(),
                options: options.clone(),
            });

            self.find_exchange(endpoint.as_str()).unwrap_or_else(|| {
                Exchange::TransportError(format!("connection refused: {endpoint}"))
            })
        }
    }

    /// A response with `status` and `body` as its raw bytes.
    pub fn raw_response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    /// An exchange carrying `body` serialized as JSON, tagged by `status`.
    pub fn json_exchange(status: u16, body: &serde_json::Value) -> Exchange {
        Exchange::from_response(raw_response(status, &body.to_string()))
    }

    /// An exchange carrying `body` verbatim, tagged by `status`.
    pub fn text_exchange(status: u16, body: &str) -> Exchange {
        Exchange::from_response(raw_response(status, body))
    }

    /// A `204 No Content` exchange.
    pub fn no_content_exchange() -> Exchange {
        Exchange::Ok(raw_response(204, ""))
    }
}
