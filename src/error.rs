//! Error types for the API layer
//!
//! All remote-call failures are represented by [`ApiError`]. The store
//! decides per operation whether a failure is surfaced to the user or
//! only logged, so this type stays close to the wire: it keeps the HTTP
//! status and whatever `detail` message the server attached.

use thiserror::Error;

/// Errors returned by [`crate::PrepApiClient`] calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure: connection refused, DNS, timeout, or a
    /// response body that could not be read or decoded
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    ///
    /// `detail` carries the `{"detail": ...}` message FastAPI-style
    /// services put in error bodies, when one was present.
    #[error("server returned {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status {
        /// HTTP status code of the failed response
        status: u16,
        /// Server-provided human-readable message, if any
        detail: Option<String>,
    },

    /// A local file could not be read for upload
    #[error("failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
}

impl ApiError {
    /// Server-provided detail message, if the failure carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
