//! Prompt-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during prompt operations.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The requested prompt was not found.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// Required argument is missing.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

impl PromptError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(arg: impl Into<String>) -> Self {
        Self::MissingArgument(arg.into())
    }
}

impl From<PromptError> for McpError {
    fn from(err: PromptError) -> Self {
        McpError::invalid_params(err.to_string(), None)
    }
}
