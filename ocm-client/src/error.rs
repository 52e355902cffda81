//! Error types for the OCM client
//!
//! This module provides the error hierarchy for every failure mode of a
//! request: transport problems, error responses from the server, payloads
//! that cannot be encoded or decoded, builders that fail and poll loops that
//! give up.

use std::fmt;
use std::time::Duration;

use ocm_base::{BuildError, CodecError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the OCM client
#[derive(Error, Debug)]
pub enum OcmError {
    /// HTTP-specific errors
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The server answered with an error status
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// A builder failed to produce an object
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Poll loop errors
    #[error("Poll error: {0}")]
    Poll(#[from] PollError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OcmError>;

/// HTTP-specific errors
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request could not be built or sent
    #[error("Failed to send request")]
    Request(#[from] reqwest::Error),

    /// Invalid endpoint URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// A header name or value is not valid
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The header name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// The round trip did not complete in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// A custom transport failed
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Serialization/deserialization errors
#[derive(Error, Debug)]
pub enum SerializationError {
    /// Request body serialization failed
    #[error("Failed to serialize request body")]
    JsonSerialize(#[source] CodecError),

    /// Response body deserialization failed
    #[error("Failed to deserialize response body")]
    JsonDeserialize {
        /// The source error
        #[source]
        source: CodecError,
        /// The data that failed to deserialize
        data: String,
    },
}

/// Reasons a poll loop stops without a result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// The poll context has no deadline, so nothing was sent
    #[error("poll context has no deadline")]
    MissingDeadline,

    /// The interval between attempts is zero, so nothing was sent
    #[error("poll interval must be greater than zero")]
    InvalidInterval,

    /// The deadline passed before the conditions held
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The poll context was cancelled
    #[error("poll cancelled")]
    Cancelled,
}

/// Error returned by the server for a request that failed.
///
/// The payload has the form
/// `{"kind":"Error","id","href","code","reason","operation_id","details"}`.
/// Bodies that are not JSON are kept as the reason text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    /// HTTP status of the response
    #[serde(skip)]
    pub status: u16,
    /// Always `Error` for well formed payloads
    pub kind: String,
    /// Identifier of the error
    pub id: String,
    /// Link to the error description
    pub href: String,
    /// Machine readable error code, e.g. `ACCT-MGMT-7`
    pub code: String,
    /// Human readable description
    pub reason: String,
    /// Identifier of the operation that failed
    pub operation_id: String,
    /// Extra structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Decode an error payload, falling back to the raw body text.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiError>(body) {
            Ok(mut error) => {
                error.status = status;
                error
            }
            Err(err) => {
                tracing::warn!("undecodable error body for status {}: {}", status, err);
                Self {
                    status,
                    kind: "Error".to_string(),
                    reason: String::from_utf8_lossy(body).trim().to_string(),
                    ..Default::default()
                }
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status is {}", self.status)?;
        if !self.id.is_empty() {
            write!(f, ", identifier is '{}'", self.id)?;
        }
        if !self.code.is_empty() {
            write!(f, ", code is '{}'", self.code)?;
        }
        if !self.operation_id.is_empty() {
            write!(f, ", operation identifier is '{}'", self.operation_id)?;
        }
        if !self.reason.is_empty() {
            write!(f, ": {}", self.reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Helper functions for common error patterns
impl OcmError {
    /// Create a timeout error
    pub fn timeout(duration: Duration) -> Self {
        Self::Http(HttpError::Timeout(duration))
    }

    /// HTTP status of an error response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(error) => Some(error.status),
            Self::Http(HttpError::Request(error)) => error.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(HttpError::Timeout(_)) => true,
            Self::Http(HttpError::Request(error)) => error.is_timeout() || error.is_connect(),
            Self::Api(error) => error.status >= 500,
            _ => false,
        }
    }

    /// The server error payload, if the server answered with an error status
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = OcmError::Poll(PollError::MissingDeadline);
        assert_eq!(error.to_string(), "Poll error: poll context has no deadline");
    }

    #[test]
    fn test_api_error_from_json() {
        let body = br#"{
            "kind": "Error",
            "id": "404",
            "href": "/api/accounts_mgmt/v1/errors/404",
            "code": "ACCT-MGMT-404",
            "reason": "Subscription 'abc' not found",
            "operation_id": "op-1"
        }"#;
        let error = ApiError::from_body(404, body);
        assert_eq!(error.status, 404);
        assert_eq!(error.code, "ACCT-MGMT-404");
        assert_eq!(
            error.to_string(),
            "status is 404, identifier is '404', code is 'ACCT-MGMT-404', operation identifier is 'op-1': Subscription 'abc' not found"
        );
    }

    #[test]
    fn test_api_error_from_text() {
        let error = ApiError::from_body(502, b"Bad Gateway\n");
        assert_eq!(error.status, 502);
        assert_eq!(error.reason, "Bad Gateway");
        assert_eq!(error.to_string(), "status is 502: Bad Gateway");
    }

    #[test]
    fn test_is_retryable() {
        let timeout_error = OcmError::timeout(Duration::from_secs(5));
        assert!(timeout_error.is_retryable());

        let server_error = OcmError::Api(ApiError {
            status: 503,
            ..Default::default()
        });
        assert!(server_error.is_retryable());

        let not_found = OcmError::Api(ApiError {
            status: 404,
            ..Default::default()
        });
        assert!(!not_found.is_retryable());
        assert!(!OcmError::Configuration("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_status() {
        let error = OcmError::Api(ApiError {
            status: 409,
            ..Default::default()
        });
        assert_eq!(error.status(), Some(409));
        assert_eq!(OcmError::Poll(PollError::Cancelled).status(), None);
    }
}
