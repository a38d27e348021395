//! Tool Registry - the single table of every tool.
//!
//! Each entry pairs a tool's metadata (name, description, input schema) with
//! its handler. The table is built once; both the rmcp router and the HTTP
//! dispatch read from it.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject, Tool},
};
#[cfg(feature = "http")]
use tracing::warn;

use super::definitions::{
    AddTool, AddUserTool, AlgorithmicArtGuideTool, CanvasDesignGuideTool, ConnectDbTool,
    GetSkillGuideTool, GreetTool, ListSkillsTool, QueryUsersByCityTool, QueryUsersTool,
    ToolDefinition,
};
use crate::core::config::Config;

/// Signature shared by every tool handler.
pub type ToolHandlerFn = fn(JsonObject, &Config) -> Result<CallToolResult, McpError>;

/// One row of the tool table.
#[derive(Clone)]
pub struct ToolEntry {
    pub tool: Tool,
    pub handler: ToolHandlerFn,
}

fn entry<T: ToolDefinition>() -> ToolEntry {
    ToolEntry {
        tool: T::to_tool(),
        handler: T::call,
    }
}

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    config: Arc<Config>,
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            entries: Self::entries(),
        }
    }

    /// The tool table.
    ///
    /// This is the central place where all tools are registered.
    pub fn entries() -> Vec<ToolEntry> {
        vec![
            entry::<AddTool>(),
            entry::<GreetTool>(),
            entry::<QueryUsersTool>(),
            entry::<QueryUsersByCityTool>(),
            entry::<AddUserTool>(),
            entry::<ConnectDbTool>(),
            entry::<ListSkillsTool>(),
            entry::<GetSkillGuideTool>(),
            entry::<AlgorithmicArtGuideTool>(),
            entry::<CanvasDesignGuideTool>(),
        ]
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.tool.name.as_ref()).collect()
    }

    /// Dispatch a tool call by name.
    pub fn dispatch(&self, name: &str, arguments: JsonObject) -> Result<CallToolResult, McpError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.tool.name == name)
            .ok_or_else(|| McpError::from(super::ToolError::not_found(name)))?;
        (entry.handler)(arguments, &self.config)
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            _ => return Err("Tool arguments must be a JSON object".to_string()),
        };

        match self.dispatch(name, arguments) {
            Ok(result) => Ok(serde_json::json!({
                "content": result.content,
                "isError": result.is_error.unwrap_or(false)
            })),
            Err(e) => {
                warn!("Tool call '{}' failed: {}", name, e.message);
                Err(e.message.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 10);
        for expected in [
            "add",
            "greet",
            "query_users",
            "query_users_by_city",
            "add_user",
            "connect_db",
            "list_all_skills",
            "get_skill_guide",
            "get_algorithmic_art_guide",
            "get_canvas_design_guide",
        ] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_tool_names_are_unique() {
        let registry = ToolRegistry::new(test_config());
        let mut names = registry.tool_names();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_dispatch() {
        let registry = ToolRegistry::new(test_config());
        let mut args = JsonObject::new();
        args.insert("a".to_string(), 1.into());
        args.insert("b".to_string(), 2.into());

        let result = registry.dispatch("add", args).unwrap();
        assert_eq!(result_text(&result), "3");
    }

    #[test]
    fn test_dispatch_unknown() {
        let registry = ToolRegistry::new(test_config());
        assert!(registry.dispatch("unknown", JsonObject::new()).is_err());
    }

    #[test]
    fn test_schemas_declare_parameters() {
        let entries = ToolRegistry::entries();
        let greet = entries.iter().find(|e| e.tool.name == "greet").unwrap();
        let properties = greet.tool.input_schema.get("properties").unwrap();
        assert!(properties.get("name").is_some());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_greet() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("greet", serde_json::json!({ "name": "Ada" }));
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(result.is_err());
    }
}
