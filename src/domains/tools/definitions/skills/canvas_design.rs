//! Canvas design guide tool definition.
//!
//! Bundles the `canvas-design` skill guide with the list of bundled fonts
//! and the fixed creative requirements for static visual pieces.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::success_result;
use crate::core::config::Config;
use crate::domains::skills::{ArtifactStore, GuideAssembler, GuideLayout, ResourceSection};
use crate::domains::tools::ToolError;

const REQUIREMENTS: &str = "## Creative Requirements
1. Start with the design philosophy: name the aesthetic movement and write 4-6 paragraphs of direction.
2. Then express it as a visual piece (.png or .pdf): 90% visual design, 10% essential text.
3. Keep text minimal and treat it as a visual element, not as explanation.
4. Aim for museum or magazine grade craftsmanship.
5. Keep every element inside the canvas with proper margins and breathing room.
6. Use font files from the fonts directory above.";

const LAYOUT: GuideLayout<'static> = GuideLayout {
    skill: "canvas-design",
    request_heading: "User Design Request",
    guide_heading: "Design Philosophy Guide",
    templates: &[],
    resources: Some(ResourceSection {
        heading: "Available Fonts",
        dir: "canvas-fonts",
        extension: ".ttf",
    }),
    instructions: Some(REQUIREMENTS),
    closing: "Following the guide above, create the visual artwork \"{request}\" for the user.",
};

/// Parameters for the canvas design guide tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CanvasDesignGuideParams {
    /// What the user wants designed, e.g. "a minimalist music festival poster".
    pub design_request: String,
}

/// Canvas design guide tool.
pub struct CanvasDesignGuideTool;

impl ToolDefinition for CanvasDesignGuideTool {
    const NAME: &'static str = "get_canvas_design_guide";
    const DESCRIPTION: &'static str = "Get the complete guide and font resources for canvas \
        visual design. Use when the user wants a poster, art piece, static image or coffee \
        table book page as PNG or PDF. Not for web front-end design. Returns the two-step \
        design philosophy guide and the list of available fonts.";

    type Params = CanvasDesignGuideParams;

    #[instrument(skip_all)]
    fn execute(
        params: &CanvasDesignGuideParams,
        config: &Config,
    ) -> Result<CallToolResult, ToolError> {
        info!("Canvas design guide tool called");

        let assembler = GuideAssembler::new(ArtifactStore::new(&config.skills.root));
        let text = assembler.assemble(&LAYOUT, &params.design_request)?;

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

    fn canvas_tree() -> (TempDir, Config) {
        let temp_dir = TempDir::new().unwrap();
        let skill = temp_dir.path().join("canvas-design");
        fs::create_dir_all(skill.join("canvas-fonts")).unwrap();
        fs::write(skill.join(GUIDE_FILE), "Form follows feeling.").unwrap();
        for font in ["Zilla.ttf", "Arvo.ttf", "Lora.otf", "OFL.txt"] {
            fs::write(skill.join("canvas-fonts").join(font), "").unwrap();
        }

        let mut config = Config::default();
        config.skills.root = temp_dir.path().to_path_buf();
        (temp_dir, config)
    }

    #[test]
    fn test_guide_lists_fonts() {
        let (_temp, config) = canvas_tree();
        let params = CanvasDesignGuideParams {
            design_request: "jazz poster".to_string(),
        };
        let text = result_text(&CanvasDesignGuideTool::execute(&params, &config).unwrap());

        assert!(text.starts_with("## User Design Request\njazz poster\n"));
        assert!(text.contains("Form follows feeling."));
        assert!(text.contains("2 files:"));
        assert!(text.find("- Arvo.ttf").unwrap() < text.find("- Zilla.ttf").unwrap());
        assert!(!text.contains("Lora.otf"));
        assert!(!text.contains("OFL.txt"));
        assert!(text.contains("## Creative Requirements"));
        assert!(text.contains("create the visual artwork \"jazz poster\""));
    }

    #[test]
    fn test_missing_fonts_dir_is_hard_failure() {
        let (temp_dir, config) = canvas_tree();
        fs::remove_dir_all(temp_dir.path().join("canvas-design/canvas-fonts")).unwrap();

        let params = CanvasDesignGuideParams {
            design_request: "x".to_string(),
        };
        assert!(CanvasDesignGuideTool::execute(&params, &config).is_err());
    }
}
