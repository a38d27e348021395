//! Greet tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::success_result;
use crate::core::config::Config;
use crate::domains::tools::ToolError;

/// Parameters for the greet tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GreetParams {
    /// Name of the person to greet.
    pub name: String,
}

/// Greet tool - returns a welcome message.
pub struct GreetTool;

impl ToolDefinition for GreetTool {
    const NAME: &'static str = "greet";
    const DESCRIPTION: &'static str = "Greet a user by name.";

    type Params = GreetParams;

    #[instrument(skip_all, fields(name = %params.name))]
    fn execute(params: &GreetParams, config: &Config) -> Result<CallToolResult, ToolError> {
        info!("Greet tool called");
        Ok(success_result(format!(
            "Hello, {}! Welcome to {}.",
            params.name, config.server.name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_greet() {
        let params = GreetParams {
            name: "Ada".to_string(),
        };
        let result = GreetTool::execute(&params, &Config::default()).unwrap();
        let text = result_text(&result);
        assert!(text.starts_with("Hello, Ada!"));
        assert!(text.contains("skill-mcp-server"));
    }
}
