//! Add tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{error_result, success_result};
use crate::core::config::Config;
use crate::domains::tools::ToolError;

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First number.
    pub a: i64,

    /// Second number.
    pub b: i64,
}

/// Add tool - sums two integers.
pub struct AddTool;

impl ToolDefinition for AddTool {
    const NAME: &'static str = "add";
    const DESCRIPTION: &'static str = "Add two integers and return their sum.";

    type Params = AddParams;

    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    fn execute(params: &AddParams, _config: &Config) -> Result<CallToolResult, ToolError> {
        info!("Add tool called");

        Ok(match params.a.checked_add(params.b) {
            Some(sum) => success_result(sum.to_string()),
            None => error_result(format!(
                "Integer overflow adding {} and {}",
                params.a, params.b
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_add() {
        let params = AddParams { a: 2, b: 40 };
        let result = AddTool::execute(&params, &Config::default()).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "42");
    }

    #[test]
    fn test_add_overflow() {
        let params = AddParams { a: i64::MAX, b: 1 };
        let result = AddTool::execute(&params, &Config::default()).unwrap();
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_add_from_arguments() {
        let args = serde_json::json!({ "a": -3, "b": 5 });
        let serde_json::Value::Object(args) = args else {
            unreachable!()
        };
        let result = AddTool::call(args, &Config::default()).unwrap();
        assert_eq!(result_text(&result), "2");
    }

    #[test]
    fn test_add_rejects_bad_arguments() {
        let args = serde_json::json!({ "a": "two" });
        let serde_json::Value::Object(args) = args else {
            unreachable!()
        };
        assert!(AddTool::call(args, &Config::default()).is_err());
    }
}
