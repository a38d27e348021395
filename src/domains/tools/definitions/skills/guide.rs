//! Get skill guide tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::success_result;
use crate::core::config::Config;
use crate::domains::skills::{ArtifactStore, GuideAssembler};
use crate::domains::tools::ToolError;

/// Parameters for the skill guide tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSkillGuideParams {
    /// Skill name, e.g. "docx", "frontend-design" or "canvas-design".
    pub skill_name: String,
}

/// Get skill guide tool - returns the full SKILL.md of one skill.
pub struct GetSkillGuideTool;

impl ToolDefinition for GetSkillGuideTool {
    const NAME: &'static str = "get_skill_guide";
    const DESCRIPTION: &'static str = "Get the complete usage guide (SKILL.md) of a skill. \
        Unknown names return the list of valid skill names.";

    type Params = GetSkillGuideParams;

    #[instrument(skip_all, fields(skill = %params.skill_name))]
    fn execute(params: &GetSkillGuideParams, config: &Config) -> Result<CallToolResult, ToolError> {
        info!("Get skill guide tool called");

        let assembler = GuideAssembler::new(ArtifactStore::new(&config.skills.root));
        let guide = assembler.lookup(&params.skill_name)?;

        Ok(success_result(guide.render()))
    }
}
