//! Algorithmic art guide tool definition.
//!
//! Bundles the `algorithmic-art` skill guide with its HTML viewer and p5.js
//! generator templates.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::success_result;
use crate::core::config::Config;
use crate::domains::skills::{ArtifactStore, GuideAssembler, GuideLayout, TemplateSection};
use crate::domains::tools::ToolError;

const LAYOUT: GuideLayout<'static> = GuideLayout {
    skill: "algorithmic-art",
    request_heading: "User Request",
    guide_heading: "Creative Guide",
    templates: &[
        TemplateSection {
            heading: "HTML Viewer Template",
            path: "templates/viewer.html",
            language: "html",
        },
        TemplateSection {
            heading: "JS Generator Template",
            path: "templates/generator_template.js",
            language: "javascript",
        },
    ],
    resources: None,
    instructions: None,
    closing: "Create the algorithmic art piece for the user from the guide and templates above.",
};

/// Parameters for the algorithmic art guide tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AlgorithmicArtGuideParams {
    /// What the user wants to create, e.g. "a flowing particle system".
    pub user_request: String,
}

/// Algorithmic art guide tool.
pub struct AlgorithmicArtGuideTool;

impl ToolDefinition for AlgorithmicArtGuideTool {
    const NAME: &'static str = "get_algorithmic_art_guide";
    const DESCRIPTION: &'static str = "Get the complete guide and templates for algorithmic / \
        generative art. Use when the user wants generative art, creative coding, p5.js flow \
        fields, particle systems, noise patterns or interactive art. Returns the creative \
        philosophy guide, an HTML viewer template and a JS generator template.";

    type Params = AlgorithmicArtGuideParams;

    #[instrument(skip_all)]
    fn execute(
        params: &AlgorithmicArtGuideParams,
        config: &Config,
    ) -> Result<CallToolResult, ToolError> {
        info!("Algorithmic art guide tool called");

        let assembler = GuideAssembler::new(ArtifactStore::new(&config.skills.root));
        let text = assembler.assemble(&LAYOUT, &params.user_request)?;

        Ok(success_result(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::skills::GUIDE_FILE;
    use crate::domains::tools::definitions::common::result_text;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.skills.root = root.to_path_buf();
        config
    }

    #[test]
    fn test_guide_with_templates() {
        let temp_dir = TempDir::new().unwrap();
        let skill = temp_dir.path().join("algorithmic-art");
        fs::create_dir_all(skill.join("templates")).unwrap();
        fs::write(skill.join(GUIDE_FILE), "Seeded randomness matters.").unwrap();
        fs::write(skill.join("templates/viewer.html"), "<canvas></canvas>").unwrap();
        fs::write(skill.join("templates/generator_template.js"), "function setup() {}").unwrap();

        let params = AlgorithmicArtGuideParams {
            user_request: "a flow field".to_string(),
        };
        let result =
            AlgorithmicArtGuideTool::execute(&params, &config_for(temp_dir.path())).unwrap();
        let text = result_text(&result);

        assert!(text.starts_with("## User Request\na flow field\n"));
        assert!(text.contains("Seeded randomness matters."));
        assert!(text.contains("```html\n<canvas></canvas>\n```"));
        assert!(text.contains("```javascript\nfunction setup() {}\n```"));
        assert!(text.find("HTML Viewer").unwrap() < text.find("JS Generator").unwrap());
    }

    #[test]
    fn test_missing_template_is_hard_failure() {
        let temp_dir = TempDir::new().unwrap();
        let skill = temp_dir.path().join("algorithmic-art");
        fs::create_dir_all(&skill).unwrap();
        fs::write(skill.join(GUIDE_FILE), "guide").unwrap();

        let params = AlgorithmicArtGuideParams {
            user_request: "anything".to_string(),
        };
        let err =
            AlgorithmicArtGuideTool::execute(&params, &config_for(temp_dir.path())).unwrap_err();
        assert!(matches!(err, ToolError::Asset(_)));
    }
}
