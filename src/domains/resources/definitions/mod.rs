//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - Content provider
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` (or `ResourceTemplateDefinition`)
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod app_settings;
pub mod file;
pub mod system_info;

use rmcp::model::ResourceContents;

use super::error::ResourceError;
use super::service::ResourceContent;
use crate::core::config::Config;

pub use app_settings::AppSettingsResource;
pub use file::FileResource;
pub use system_info::SystemInfoResource;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}

/// Trait for resources that provide dynamic content.
pub trait DynamicResourceProvider {
    /// Resolve the dynamic content. Called on every read.
    fn resolve(uri: &str, config: &Config) -> Result<ResourceContents, ResourceError>;
}

/// Trait for parameterized resources addressed by a URI template.
pub trait ResourceTemplateDefinition {
    /// RFC 6570 URI template, e.g. `file:///{path}`.
    const URI_TEMPLATE: &'static str;

    /// The display name of the template.
    const NAME: &'static str;

    /// A description of the template.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resolved content.
    const MIME_TYPE: &'static str;

    /// Extract the template parameter from a concrete URI, if it matches.
    fn matches(uri: &str) -> Option<&str>;

    /// Resolve a matching URI.
    fn resolve(uri: &str, param: &str) -> Result<ResourceContents, ResourceError>;
}
