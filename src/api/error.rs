//! Error types for Aligni API operations

use thiserror::Error;

use crate::api::transport::TransportError;
use crate::api::xml::XmlError;

/// Result type alias for Aligni API operations
pub type Result<T> = std::result::Result<T, AligniError>;

/// Errors that can occur while talking to Aligni
#[derive(Debug, Error)]
pub enum AligniError {
    /// The request never produced an HTTP response (DNS, refused connection, timeout)
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Aligni rejected the request (HTTP 400); `body` is the raw response
    #[error("Bad Request: {body}")]
    BadRequest { body: String },

    /// Aligni refused the call because the rate limit was exceeded (HTTP 429)
    #[error("Rate Limited: Aligni rate limit exceeded")]
    RateLimited,

    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response parsed but did not have the expected shape
    #[error("Malformed {resource} response: {reason}")]
    MalformedResponse { resource: String, reason: String },

    /// The request body could not be serialized
    #[error("Failed to build {resource} request: {source}")]
    Request {
        resource: String,
        #[source]
        source: XmlError,
    },
}

impl AligniError {
    pub(crate) fn malformed(resource: &str, reason: impl Into<String>) -> Self {
        AligniError::MalformedResponse {
            resource: resource.to_string(),
            reason: reason.into(),
        }
    }
}
