//! Add user tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{error_result, success_result};
use crate::core::config::Config;
use crate::domains::tools::ToolError;
use crate::domains::users::UserStore;

/// Parameters for the add user tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddUserParams {
    /// Full name.
    pub name: String,

    /// Age in years.
    pub age: i64,

    /// City of residence.
    pub city: String,
}

/// Add user tool - inserts one row into the `users` table.
pub struct AddUserTool;

impl ToolDefinition for AddUserTool {
    const NAME: &'static str = "add_user";
    const DESCRIPTION: &'static str = "Add a user with a name, age and city.";

    type Params = AddUserParams;

    #[instrument(skip_all, fields(name = %params.name))]
    fn execute(params: &AddUserParams, config: &Config) -> Result<CallToolResult, ToolError> {
        info!("Add user tool called");

        let store = UserStore::new(&config.storage.database_path);
        // The affected-row count is the only success signal.
        Ok(
            match store.insert(&params.name, params.age, &params.city) {
                Ok(0) => error_result(format!("Failed to add user {}", params.name)),
                Ok(_) => success_result(format!(
                    "Added user {}, {} years old, from {}",
                    params.name, params.age, params.city
                )),
                Err(e) => error_result(format!("Failed to add user {}: {}", params.name, e)),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::test_support::seeded_config;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_add_user() {
        let (_temp, config) = seeded_config();
        let params = AddUserParams {
            name: "Carol".to_string(),
            age: 41,
            city: "Nice".to_string(),
        };

        let result = AddUserTool::execute(&params, &config).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(
            result_text(&result),
            "Added user Carol, 41 years old, from Nice"
        );

        let rows = UserStore::new(&config.storage.database_path)
            .by_city("Nice")
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_add_user_without_table() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.database_path = temp_dir.path().join("empty.db");

        let params = AddUserParams {
            name: "Dan".to_string(),
            age: 20,
            city: "Rome".to_string(),
        };
        let result = AddUserTool::execute(&params, &config).unwrap();
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("Failed to add user Dan"));
    }
}
