//! Error types for the resource clients.
//!
//! One enum per resource, each carrying a communication variant for gateway
//! failures plus the resource's own validation failures.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// An error occurred while communicating with the backend.
    #[error("API communication error: {0}")]
    ApiCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ApiCommunicationError(msg)
    }
}

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The product form failed local validation; nothing was sent.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the backend.
    #[error("API communication error: {0}")]
    ApiCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ApiCommunicationError(msg)
    }
}

/// Errors that can occur while logging in, out, or checking the session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// A command that needs a session ran without a stored token.
    #[error("Not logged in: run `shop-admin login` first")]
    MissingToken,

    /// Email or password left empty.
    #[error("Please enter email and password")]
    MissingCredentials,

    /// The backend refused the login.
    #[error("Login failed: {0}")]
    Rejected(String),

    /// The token file could not be read or written.
    #[error("Session storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the backend.
    #[error("API communication error: {0}")]
    ApiCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ApiCommunicationError(msg)
    }
}

/// Errors that can occur while uploading a product image.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImageError {
    /// The file is over the upload limit; nothing was sent.
    #[error("Image too large ({size} bytes). Please choose one under 500KB.")]
    TooLarge { size: u64 },

    #[error("Image upload is not configured: set SHOP_ADMIN_CLOUDINARY_CLOUD_NAME and SHOP_ADMIN_CLOUDINARY_UPLOAD_PRESET")]
    NotConfigured,

    /// The local file could not be read.
    #[error("Cannot read image: {0}")]
    Io(String),

    /// The asset host refused the upload or answered with something unusable.
    #[error("Image upload failed: {0}")]
    UploadFailed(String),
}
