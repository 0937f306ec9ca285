//! Resolution error types.

use thiserror::Error;

/// Why a resolver could not produce a resource.
///
/// Only the variant matters to the request handler: `NotFound` becomes a
/// 404, everything else a 502.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No resource exists for the identifier.
    #[error("resource {resource} not found")]
    NotFound { resource: String },

    /// The resolver or its backing store failed.
    #[error("{message}")]
    Other { message: String },
}

impl ResolveError {
    /// Create a new "not found" error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a new resolver failure.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
