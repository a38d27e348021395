//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call by name with a
//! JSON argument object.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - The tool table and HTTP dispatch
//! - `router.rs` - rmcp ToolRouter built from the table for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! **No need to modify `server.rs` when adding a tool.** The router is built
//! from the registry table.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::{ToolEntry, ToolRegistry};
pub use router::build_tool_router;
