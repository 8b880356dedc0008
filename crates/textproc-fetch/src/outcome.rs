//! Classified results of a fetch.
//!
//! Every call resolves to a [`FetchResult`]. Failures keep the pair a caller
//! would have received as `(payload, status)`: see [`FetchFailure::payload`]
//! and [`FetchFailure::status_code`].

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::transport::{Exchange, RawResponse};

/// Outcome of one fetch.
pub type FetchResult = Result<FetchSuccess, FetchFailure>;

/// A successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchSuccess {
    /// The parsed JSON body.
    Json(Value),
    /// A `204 No Content` response, passed through without a body parse.
    NoContent(RawResponse),
}

impl FetchSuccess {
    /// The parsed JSON body, if any.
    pub const fn json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::NoContent(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::NoContent(_) => None,
        }
    }

    pub const fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent(_))
    }
}

/// Body of an HTTP error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    Json(Value),
    /// Body that was not valid JSON, kept as text.
    Raw(String),
    Empty,
}

impl ErrorBody {
    fn parse(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::Empty;
        }
        serde_json::from_slice(body).map_or_else(
            |_| Self::Raw(String::from_utf8_lossy(body).into_owned()),
            Self::Json,
        )
    }

    fn to_payload(&self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value.clone()),
            Self::Raw(text) => Some(Value::String(text.clone())),
            Self::Empty => None,
        }
    }
}

/// The three failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Http,
    Unknown,
}

/// A failed fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// No response was received.
    #[error("Network failure: {message}")]
    Network {
        /// Transport error description
        message: String,
    },

    /// The server answered with a non-2xx status.
    #[error("Request failed with status {status}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Error response body
        body: ErrorBody,
    },

    /// Anything that is neither of the above.
    #[error("Unexpected fetch error: {message}")]
    Unknown {
        /// Error description
        message: String,
        /// Status, when one was available
        status: Option<u16>,
    },
}

impl FetchFailure {
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } => FailureKind::Network,
            Self::Http { .. } => FailureKind::Http,
            Self::Unknown { .. } => FailureKind::Unknown,
        }
    }

    /// Payload reported to failure handlers.
    ///
    /// `None` for network failures and empty error bodies. Non-JSON error
    /// bodies and unknown errors are reported as a JSON string.
    pub fn payload(&self) -> Option<Value> {
        match self {
            Self::Network { .. } => None,
            Self::Http { body, .. } => body.to_payload(),
            Self::Unknown { message, .. } => Some(Value::String(message.clone())),
        }
    }

    /// Status reported to failure handlers; `0` when there is none.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Network { .. } => 0,
            Self::Http { status, .. } => *status,
            Self::Unknown { status, .. } => match status {
                Some(status) => *status,
                None => 0,
            },
        }
    }

    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

/// Classify a transport exchange.
///
/// Precedence: transport errors are network failures, non-2xx responses are
/// HTTP failures with their body parsed, and a 2xx body that is not JSON is
/// an unknown failure. A 204 is never parsed. A body cut off after the status
/// arrived keeps that status: an HTTP failure with no payload when non-2xx,
/// otherwise an unknown failure.
pub(crate) fn classify(exchange: Exchange) -> FetchResult {
    match exchange {
        Exchange::TransportError(message) => Err(FetchFailure::Network { message }),
        Exchange::HttpError(response) => Err(FetchFailure::Http {
            status: response.status.as_u16(),
            body: ErrorBody::parse(&response.body),
        }),
        Exchange::IncompleteBody { status, .. } if !status.is_success() => {
            Err(FetchFailure::Http {
                status: status.as_u16(),
                body: ErrorBody::Empty,
            })
        }
        Exchange::IncompleteBody { status, message } => Err(FetchFailure::Unknown {
            message,
            status: Some(status.as_u16()),
        }),
        Exchange::Ok(response) if response.status == StatusCode::NO_CONTENT => {
            Ok(FetchSuccess::NoContent(response))
        }
        Exchange::Ok(response) => serde_json::from_slice(&response.body)
            .map(FetchSuccess::Json)
            .map_err(|e| FetchFailure::Unknown {
                message: format!("invalid JSON body: {e}"),
                status: None,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::{
        json_exchange, no_content_exchange, raw_response, text_exchange,
    };
    use serde_json::json;

    #[test]
    fn test_no_content_is_passed_through_unparsed() {
        // A body that would fail to parse proves no parse is attempted
        let exchange = Exchange::Ok(raw_response(204, "not json"));
        let success = classify(exchange).unwrap();

        let FetchSuccess::NoContent(response) = success else {
            panic!("expected NoContent");
        };
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_eq!(&response.body[..], b"not json");
    }

    #[test]
    fn test_json_body_is_returned_exactly() {
        let success = classify(json_exchange(200, &json!({"a": 1}))).unwrap();
        assert_eq!(success, FetchSuccess::Json(json!({"a": 1})));
        assert_eq!(success.json(), Some(&json!({"a": 1})));
        assert!(!success.is_no_content());
    }

    #[test]
    fn test_non_204_success_statuses_are_parsed() {
        let success = classify(json_exchange(201, &json!(["created"]))).unwrap();
        assert_eq!(success.into_json(), Some(json!(["created"])));
    }

    #[test]
    fn test_transport_error_is_network_failure() {
        let failure =
            classify(Exchange::TransportError("dns error".to_string())).unwrap_err();

        assert_eq!(failure.kind(), FailureKind::Network);
        assert!(failure.is_network());
        assert_eq!(failure.payload(), None);
        assert_eq!(failure.status_code(), 0);
    }

    #[test]
    fn test_http_error_with_json_body() {
        let failure = classify(json_exchange(404, &json!({"error": "not found"}))).unwrap_err();

        assert_eq!(failure.kind(), FailureKind::Http);
        assert_eq!(failure.payload(), Some(json!({"error": "not found"})));
        assert_eq!(failure.status_code(), 404);
    }

    #[test]
    fn test_http_error_with_text_body_keeps_raw_text() {
        let failure = classify(text_exchange(502, "Bad Gateway")).unwrap_err();

        assert_eq!(
            failure,
            FetchFailure::Http {
                status: 502,
                body: ErrorBody::Raw("Bad Gateway".to_string()),
            }
        );
        assert_eq!(failure.payload(), Some(json!("Bad Gateway")));
    }

    #[test]
    fn test_http_error_with_empty_body() {
        let failure = classify(text_exchange(500, "  \n")).unwrap_err();
        assert_eq!(failure.payload(), None);
        assert_eq!(failure.status_code(), 500);
    }

    #[test]
    fn test_invalid_success_body_is_unknown_failure() {
        let failure = classify(text_exchange(200, "<html>")).unwrap_err();

        assert_eq!(failure.kind(), FailureKind::Unknown);
        assert_eq!(failure.status_code(), 0);
        let payload = failure.payload().unwrap();
        assert!(payload.as_str().unwrap().starts_with("invalid JSON body"));
    }

    #[test]
    fn test_incomplete_error_body_keeps_status() {
        let failure = classify(Exchange::IncompleteBody {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "connection closed before message completed".to_string(),
        })
        .unwrap_err();

        assert_eq!(
            failure,
            FetchFailure::Http {
                status: 500,
                body: ErrorBody::Empty,
            }
        );
        assert_eq!(failure.payload(), None);
        assert_eq!(failure.status_code(), 500);
    }

    #[test]
    fn test_incomplete_success_body_is_unknown_with_status() {
        let failure = classify(Exchange::IncompleteBody {
            status: StatusCode::OK,
            message: "failed to read response body: eof".to_string(),
        })
        .unwrap_err();

        assert_eq!(failure.kind(), FailureKind::Unknown);
        assert_eq!(failure.status_code(), 200);
        assert_eq!(failure.payload(), Some(json!("failed to read response body: eof")));
    }

    #[test]
    fn test_classification_is_deterministic() {
        for exchange in [
            json_exchange(200, &json!({"a": 1})),
            json_exchange(404, &json!({"error": "not found"})),
            no_content_exchange(),
            Exchange::TransportError("refused".to_string()),
        ] {
            assert_eq!(classify(exchange.clone()), classify(exchange));
        }
    }

    #[test]
    fn test_failure_messages() {
        let failure = FetchFailure::Http {
            status: 503,
            body: ErrorBody::Empty,
        };
        assert_eq!(failure.to_string(), "Request failed with status 503");

        let failure = FetchFailure::Unknown {
            message: "boom".to_string(),
            status: Some(418),
        };
        assert_eq!(failure.status_code(), 418);
        assert!(failure.to_string().contains("boom"));
    }
}
