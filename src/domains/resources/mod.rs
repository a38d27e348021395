//! Resources domain module.
//!
//! Resources are read-only data addressed by URI: fixed URIs registered in
//! the registry, and URI templates whose parameter is substituted into a
//! read.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{ResourceDefinition, ResourceTemplateDefinition};
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources};
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
