//! Errors raised while talking to the storefront API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Request could not be sent or the connection dropped
    #[error("Connection failed to '{endpoint}': {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// Response body was not the expected GraphQL envelope
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },
}

impl StorefrontError {
    /// Whether the error means the request never produced a usable answer.
    ///
    /// Transport errors are eligible for the offline fallback; anything the
    /// backend reported in a well-formed response is not an error at all.
    pub fn is_transport(&self) -> bool {
        !matches!(self, StorefrontError::ClientBuild(_))
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            StorefrontError::ClientBuild(_) => "client_build_error",
            StorefrontError::Connection { .. } => "connection_error",
            StorefrontError::Status { .. } => "status_error",
            StorefrontError::Decode(_) => "decode_error",
            StorefrontError::Timeout { .. } => "request_timeout",
        }
    }
}
