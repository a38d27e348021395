//! Query users tool definitions.
//!
//! Two read-only queries over the `users` table: every row, or the rows of a
//! single city.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{error_result, success_result};
use crate::core::config::Config;
use crate::domains::tools::ToolError;
use crate::domains::users::{UserStore, format_table};

/// The query-all tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct QueryUsersParams {}

/// Parameters for the by-city query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryUsersByCityParams {
    /// City to filter on (exact match).
    pub city: String,
}

/// List every user.
pub struct QueryUsersTool;

impl ToolDefinition for QueryUsersTool {
    const NAME: &'static str = "query_users";
    const DESCRIPTION: &'static str =
        "List all users as a table of ID, name, age and city.";

    type Params = QueryUsersParams;

    #[instrument(skip_all)]
    fn execute(_params: &QueryUsersParams, config: &Config) -> Result<CallToolResult, ToolError> {
        info!("Query users tool called");

        let store = UserStore::new(&config.storage.database_path);
        Ok(match store.all() {
            Ok(rows) => success_result(format_table(&rows)),
            Err(e) => error_result(format!("Failed to query users: {}", e)),
        })
    }
}

/// List the users of one city.
pub struct QueryUsersByCityTool;

impl ToolDefinition for QueryUsersByCityTool {
    const NAME: &'static str = "query_users_by_city";
    const DESCRIPTION: &'static str =
        "List the users living in the given city as a table of ID, name, age and city.";

    type Params = QueryUsersByCityParams;

    #[instrument(skip_all, fields(city = %params.city))]
    fn execute(
        params: &QueryUsersByCityParams,
        config: &Config,
    ) -> Result<CallToolResult, ToolError> {
        info!("Query users by city tool called");

        let store = UserStore::new(&config.storage.database_path);
        Ok(match store.by_city(&params.city) {
            Ok(rows) if rows.is_empty() => {
                success_result(format!("No users found in city {}", params.city))
            }
            Ok(rows) => success_result(format_table(&rows)),
            Err(e) => error_result(format!("Failed to query users: {}", e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;
    use super::super::test_support::seeded_config;

    #[test]
    fn test_query_users() {
        let (_temp, config) = seeded_config();
        let result = QueryUsersTool::execute(&QueryUsersParams::default(), &config).unwrap();
        let text = result_text(&result);
        assert!(text.starts_with("ID | Name | Age | City\n"));
        assert!(text.contains("1 | Alice | 30 | Paris"));
        assert!(text.contains("2 | Bob | 25 | Lyon"));
    }

    #[test]
    fn test_query_users_by_city() {
        let (_temp, config) = seeded_config();
        let params = QueryUsersByCityParams {
            city: "Lyon".to_string(),
        };
        let text = result_text(&QueryUsersByCityTool::execute(&params, &config).unwrap());
        assert!(text.contains("Bob"));
        assert!(!text.contains("Alice"));
    }

    #[test]
    fn test_query_users_by_unknown_city() {
        let (_temp, config) = seeded_config();
        let params = QueryUsersByCityParams {
            city: "Oslo".to_string(),
        };
        let result = QueryUsersByCityTool::execute(&params, &config).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "No users found in city Oslo");
    }

    #[test]
    fn test_query_without_table_is_tool_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.database_path = temp_dir.path().join("empty.db");

        let result = QueryUsersTool::execute(&QueryUsersParams::default(), &config).unwrap();
        assert!(result.is_error.unwrap_or(false));
    }
}
