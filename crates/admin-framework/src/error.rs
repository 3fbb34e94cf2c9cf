//! # Gateway Errors
//!
//! This module defines the common error type used by every gateway and
//! resource client. Resource-specific clients map it into their own error
//! enums, the same way each resource keeps one error type for all of its
//! operations.

/// Errors that can occur while talking to the admin backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response (connection refused, DNS, reset).
    #[error("Transport error: {0}")]
    Transport(String),
    /// The backend rejected the credential (HTTP 401/403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    /// A mock gateway received a request it did not expect.
    #[error("Unexpected request: {0}")]
    Unexpected(String),
}

impl GatewayError {
    /// True when the backend reported that the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Status { status: 404, .. })
    }
}
