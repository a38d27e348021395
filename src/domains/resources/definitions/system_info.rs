//! System info resource definition.

use chrono::Local;
use rmcp::model::ResourceContents;

use super::{DynamicResourceProvider, ResourceDefinition};
use crate::core::config::Config;
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Host and process information (dynamic).
pub struct SystemInfoResource;

impl ResourceDefinition for SystemInfoResource {
    const URI: &'static str = "system://info";
    const NAME: &'static str = "System Information";
    const DESCRIPTION: &'static str =
        "Operating system, architecture, server version, local time and working directory";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::SystemInfo)
    }
}

impl DynamicResourceProvider for SystemInfoResource {
    fn resolve(uri: &str, config: &Config) -> Result<ResourceContents, ResourceError> {
        let cwd = std::env::current_dir()?;
        let text = format!(
            "Operating system: {} ({})\nServer: {} {}\nCurrent time: {}\nCurrent directory: {}\n",
            std::env::consts::OS,
            std::env::consts::ARCH,
            config.server.name,
            config.server.version,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            cwd.display(),
        );

        Ok(ResourceContents::text(text, uri))
    }
}
