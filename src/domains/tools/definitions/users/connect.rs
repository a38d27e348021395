//! Connect database tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{error_result, success_result};
use crate::core::config::Config;
use crate::domains::tools::ToolError;
use crate::domains::users::UserStore;

/// Parameters for the connect tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConnectDbParams {
    /// Path to a SQLite database file. The file is created if missing.
    pub path: String,
}

/// Connect tool - checks that a database can be opened.
pub struct ConnectDbTool;

impl ToolDefinition for ConnectDbTool {
    const NAME: &'static str = "connect_db";
    const DESCRIPTION: &'static str =
        "Open and close a connection to the SQLite database at the given path.";

    type Params = ConnectDbParams;

    #[instrument(skip_all, fields(path = %params.path))]
    fn execute(params: &ConnectDbParams, _config: &Config) -> Result<CallToolResult, ToolError> {
        info!("Connect database tool called");

        Ok(match UserStore::new(&params.path).ping() {
            Ok(()) => success_result("Database connection succeeded"),
            Err(e) => error_result(format!("Database connection failed: {}", e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_connect() {
        let temp_dir = TempDir::new().unwrap();
        let params = ConnectDbParams {
            path: temp_dir.path().join("new.db").to_string_lossy().to_string(),
        };
        let result = ConnectDbTool::execute(&params, &Config::default()).unwrap();
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_connect_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let params = ConnectDbParams {
            path: temp_dir
                .path()
                .join("missing/dir/new.db")
                .to_string_lossy()
                .to_string(),
        };
        let result = ConnectDbTool::execute(&params, &Config::default()).unwrap();
        assert!(result.is_error.unwrap_or(false));
    }
}
