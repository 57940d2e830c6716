/*
[INPUT]:  Error sources (transport, envelope decoding, exchange rejections, auth, projection)
[OUTPUT]: Structured error types with enough context to tell every failure kind apart
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error object carried in a JSON-RPC `error` member
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("code {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Why `public/auth` did not produce a token
#[derive(Error, Debug)]
pub enum AuthFailure {
    /// The auth request never got a response body
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body was not a well-formed envelope
    #[error("undecodable response: {0}")]
    Decode(String),

    /// The exchange answered with a JSON-RPC error
    #[error("rejected by exchange ({0})")]
    Rejected(RpcError),

    /// The result object has no usable `access_token`
    #[error("result carries no access_token")]
    MissingAccessToken,
}

/// What was wrong with a field during projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionFault {
    Missing,
    InvalidType { expected: &'static str },
}

impl std::fmt::Display for ProjectionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionFault::Missing => f.write_str("missing"),
            ProjectionFault::InvalidType { expected } => write!(f, "expected {expected}"),
        }
    }
}

/// Main error type for the Deribit adapter
#[derive(Error, Debug)]
pub enum DeribitError {
    /// Network, TLS or timeout failure before a body was read
    #[error("transport failure posting to {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body is not a valid JSON-RPC response envelope
    #[error("malformed response ({reason}): {raw}")]
    Decode { reason: String, raw: String },

    /// Exchange rejected the request
    #[error("RPC error {0}")]
    Rpc(RpcError),

    /// Authentication failed
    #[error("authentication failed: {reason}")]
    Auth { reason: AuthFailure },

    /// A decoded result lacks a field the operation expects
    #[error("{method}: field `{field}` {fault}")]
    Projection {
        method: String,
        field: String,
        fault: ProjectionFault,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization failed while encoding a request
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl DeribitError {
    /// Check if the error came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, DeribitError::Transport { .. })
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        match self {
            DeribitError::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, DeribitError::Auth { .. })
    }

    /// Exchange error code, if the exchange rejected the call
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            DeribitError::Rpc(err) => Some(err.code),
            DeribitError::Auth {
                reason: AuthFailure::Rejected(err),
            } => Some(err.code),
            _ => None,
        }
    }

    pub(crate) fn decode(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        DeribitError::Decode {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    /// Re-label a failed `public/auth` round trip as an auth failure
    ///
    /// Local errors (config, serialization, URL) pass through untouched.
    pub(crate) fn into_auth_failure(self) -> Self {
        let reason = match self {
            DeribitError::Rpc(rpc) => AuthFailure::Rejected(rpc),
            err @ DeribitError::Transport { .. } => AuthFailure::Transport(err.to_string()),
            err @ DeribitError::Decode { .. } => AuthFailure::Decode(err.to_string()),
            other => return other,
        };
        DeribitError::Auth { reason }
    }

    pub(crate) fn projection(method: &str, field: impl Into<String>, fault: ProjectionFault) -> Self {
        DeribitError::Projection {
            method: method.to_string(),
            field: field.into(),
            fault,
        }
    }
}

/// Result type alias for Deribit operations
pub type Result<T> = std::result::Result<T, DeribitError>;
