//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::skills::SkillError;

/// Errors that abort a tool call at protocol level.
///
/// Failures the calling agent is expected to read and react to are returned
/// as tool results instead and never reach this type.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A bundled skill asset is missing or unreadable.
    #[error("Skill asset error: {0}")]
    Asset(#[from] SkillError),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) | ToolError::InvalidArguments(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            ToolError::Asset(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}
