//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Error reading skill artifacts.
    #[error("Skill error: {0}")]
    Skill(#[from] crate::domains::skills::SkillError),

    /// Error from the user store.
    #[error("Storage error: {0}")]
    Storage(#[from] crate::domains::users::StorageError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::skills::SkillError;

    #[test]
    fn test_domain_errors_convert() {
        let missing = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err: Error = SkillError::from_io("guide.md", missing).into();
        assert!(matches!(err, Error::Skill(_)));
        assert!(err.to_string().contains("guide.md"));
    }
}
