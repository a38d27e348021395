//! Application settings resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

const SETTINGS: &str = "Application: Skill MCP Server
Version: 0.1.0
Author: MCP learner
Created: 2024
";

/// Static application settings.
pub struct AppSettingsResource;

impl ResourceDefinition for AppSettingsResource {
    const URI: &'static str = "config://app-settings";
    const NAME: &'static str = "Application Settings";
    const DESCRIPTION: &'static str = "Static application settings";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Text(SETTINGS.to_string())
    }
}
