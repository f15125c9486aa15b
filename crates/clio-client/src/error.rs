//! Client error types.

use std::fmt;

/// Errors that can occur when using the clio client.
///
/// The client does not inspect HTTP status codes: a 4xx or 5xx response is
/// returned to the caller as a normal `reqwest::Response`. The variants here
/// cover only the transport itself and the two construction-time failures
/// Rust's typed request API surfaces.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// Network-level error (DNS, connection refused, timeout, TLS) or an
    /// invalid request URL.
    Network(String),

    /// A header name or value was not a valid HTTP header.
    InvalidHeader {
        name: String,
        message: String,
    },

    /// Failed to serialize a JSON request body.
    Serialization(String),
}

impl ClientError {
    /// Create a network error from a reqwest error.
    pub fn network(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }

    pub(crate) fn invalid_header(name: &str, err: impl fmt::Display) -> Self {
        Self::InvalidHeader {
            name: name.to_string(),
            message: err.to_string(),
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(msg) => msg,
            Self::InvalidHeader { message, .. } => message,
            Self::Serialization(msg) => msg,
        }
    }

    /// Returns `true` if this is a network-level error.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns `true` if this error came from an invalid header.
    pub fn is_invalid_header(&self) -> bool {
        matches!(self, Self::InvalidHeader { .. })
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::InvalidHeader { name, message } => {
                write!(f, "Invalid header [{}]: {}", name, message)
            }
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}
