//! Helpers shared across tool definitions.

use rmcp::model::{CallToolResult, Content, RawContent};
use tracing::warn;

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create an error result with a formatted message.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Concatenated text of every text item in a result.
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            RawContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
