//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()` or `get_all_resource_templates()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    AppSettingsResource, FileResource, ResourceDefinition, ResourceTemplateDefinition,
    SystemInfoResource,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

fn build_template<T: ResourceTemplateDefinition>() -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: T::URI_TEMPLATE.to_string(),
        name: T::NAME.to_string(),
        title: None,
        description: Some(T::DESCRIPTION.to_string()),
        mime_type: Some(T::MIME_TYPE.to_string()),
    }
    .no_annotation()
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<AppSettingsResource>(),
        build_resource::<SystemInfoResource>(),
    ]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![build_template::<FileResource>()]
}
