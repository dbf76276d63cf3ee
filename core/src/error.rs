//! Error types for the todo viewer.
//!
//! # Design
//! Every way an action can fail (the transport, a non-2xx status, a body
//! that does not decode) is one `ApiError`. The controller never tells these
//! apart in what it shows the user; the variants exist for logs and tests.

use std::fmt;

/// Errors produced while talking to the remote todo source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a status outside 2xx.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The host could not complete the round-trip (offline, CORS, DNS...).
    TransportError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::HttpError { status, .. } => {
                write!(f, "server responded with HTTP {status}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::TransportError(msg) => {
                write!(f, "network error: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
