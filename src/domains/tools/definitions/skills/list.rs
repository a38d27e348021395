//! List skills tool definition.
//!
//! Renders every entry of the catalog document with its description.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::success_result;
use crate::core::config::Config;
use crate::domains::skills::{SkillRecord, catalog};
use crate::domains::tools::ToolError;

/// The list tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListSkillsParams {}

/// List skills tool - shows every skill of the catalog.
pub struct ListSkillsTool;

impl ToolDefinition for ListSkillsTool {
    const NAME: &'static str = "list_all_skills";
    const DESCRIPTION: &'static str = "List every available skill with its description. \
        Use it to find out which skills exist and pick the right one for a task, \
        then call get_skill_guide for the full guide.";

    type Params = ListSkillsParams;

    #[instrument(skip_all)]
    fn execute(_params: &ListSkillsParams, config: &Config) -> Result<CallToolResult, ToolError> {
        info!("List skills tool called");

        let records = catalog::load(&config.skills.catalog_path)?;
        info!("Catalog lists {} skills", records.len());

        Ok(success_result(render(&records)))
    }
}

fn render(records: &[SkillRecord]) -> String {
    let mut out = String::from("## Available Skills\n\n");
    for record in records {
        out.push_str(&format!("### {}\n{}\n\n", record.name, record.description));
    }
    out.push_str("\nCall `get_skill_guide(skill_name)` to get the full guide of a skill.");
    out
}
