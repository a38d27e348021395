//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::skills::SkillError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource or template matches the URI.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A backing artifact could not be read.
    #[error("Artifact error: {0}")]
    Artifact(#[from] SkillError),

    /// An I/O error occurred while building the resource.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}

impl From<ResourceError> for McpError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(_) => McpError::resource_not_found(err.to_string(), None),
            ResourceError::Artifact(_) | ResourceError::Io(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}
