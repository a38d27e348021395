//! Tool definitions module.
//!
//! Each tool lives in its own file and implements [`ToolDefinition`]:
//! a name, a description, a parameter struct (its JSON schema is derived
//! with `schemars`) and an `execute()` function.
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching group (e.g., `basic/my_tool.rs`)
//! 2. Implement `ToolDefinition`
//! 3. Export it here
//! 4. Add it to the table in `registry.rs`

pub mod basic;
pub mod common;
pub mod skills;
pub mod users;

use rmcp::{
    ErrorData as McpError,
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::error::ToolError;
use crate::core::config::Config;

pub use basic::{AddTool, GreetTool};
pub use skills::{AlgorithmicArtGuideTool, CanvasDesignGuideTool, GetSkillGuideTool, ListSkillsTool};
pub use users::{AddUserTool, ConnectDbTool, QueryUsersByCityTool, QueryUsersTool};

/// Trait implemented by every tool.
pub trait ToolDefinition: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Parameters accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Run the tool.
    ///
    /// `Err` is reserved for failures the host must see as a fault; anything
    /// the agent can act on is returned as a (possibly `is_error`) result.
    fn execute(params: &Self::Params, config: &Config) -> Result<CallToolResult, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Decode raw call arguments and run the tool.
    fn call(arguments: JsonObject, config: &Config) -> Result<CallToolResult, McpError> {
        let params: Self::Params = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::execute(&params, config).map_err(McpError::from)
    }
}
