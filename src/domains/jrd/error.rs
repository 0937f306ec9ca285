//! Descriptor encoding error types.

use thiserror::Error;

/// Errors that can occur while encoding a resource descriptor.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// JSON serialization failed.
    #[error("unable to marshal resource: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other encoder failure.
    #[error("{message}")]
    Other { message: String },
}

impl EncodeError {
    /// Create a new encoder failure.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
