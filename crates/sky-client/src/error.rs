//! Resource client error types.

use thiserror::Error;

/// Errors that can occur when calling the remote booking services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },
}
