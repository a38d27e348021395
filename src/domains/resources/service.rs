//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. A read looks
//! for an exact URI first and then tries each template in turn.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file, unless it
//! needs a new kind of dynamic content.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::{info, instrument, warn};

use super::definitions::{
    DynamicResourceProvider, FileResource, ResourceTemplateDefinition, SystemInfoResource,
};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::Config;

/// Service for managing and accessing resources.
pub struct ResourceService {
    config: Arc<Config>,

    /// Key: resource URI
    resources: HashMap<String, ResourceEntry>,

    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content computed on every read.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy)]
pub enum DynamicResourceType {
    /// Host and process information.
    SystemInfo,
}

impl ResourceService {
    /// Create a new ResourceService.
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: HashMap::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources, sorted by URI.
    pub async fn list_resources(&self) -> Vec<Resource> {
        let mut resources: Vec<Resource> = self
            .resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect();
        resources.sort_by(|a, b| a.raw.uri.cmp(&b.raw.uri));
        resources
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => match &entry.content {
                ResourceContent::Text(text) => ResourceContents::text(text, uri),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(uri, *dynamic_type)?
                }
            },
            None => self.resolve_template(uri)?,
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::SystemInfo => SystemInfoResource::resolve(uri, &self.config),
        }
    }

    fn resolve_template(&self, uri: &str) -> Result<ResourceContents, ResourceError> {
        if let Some(path) = FileResource::matches(uri) {
            return FileResource::resolve(uri, path);
        }

        warn!("No resource matches URI: {}", uri);
        Err(ResourceError::not_found(uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(Config::default()))
    }

    fn first_text(result: ReadResourceResult) -> String {
        match result.contents.into_iter().next() {
            Some(ResourceContents::TextResourceContents { text, .. }) => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_list_resources_sorted() {
        let resources = service().list_resources().await;
        let uris: Vec<_> = resources.iter().map(|r| r.raw.uri.as_str()).collect();
        assert_eq!(uris, vec!["config://app-settings", "system://info"]);
    }

    #[tokio::test]
    async fn test_read_static_resource() {
        let result = service()
            .read_resource("config://app-settings")
            .await
            .unwrap();
        assert!(first_text(result).contains("Version"));
    }

    #[tokio::test]
    async fn test_read_dynamic_resource() {
        let result = service().read_resource("system://info").await.unwrap();
        assert!(first_text(result).contains("Current time: "));
    }

    #[tokio::test]
    async fn test_read_file_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "exact\ncontent\n").unwrap();

        let uri = format!("file:///{}", path.display());
        let result = service().read_resource(&uri).await.unwrap();
        assert_eq!(first_text(result), "exact\ncontent\n");
    }

    #[tokio::test]
    async fn test_read_missing_file_succeeds() {
        let result = service()
            .read_resource("file:///does-not-exist.txt")
            .await
            .unwrap();
        assert!(first_text(result).contains("not found"));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("mcp://server/nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
