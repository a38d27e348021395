//! Skill MCP Server Library
//!
//! A Model Context Protocol server that hands skill guides, templates and
//! font manifests from an on-disk skills tree to an AI client, next to a few
//! small tools, resources and prompts.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **skills**: artifact reads, catalog parsing and guide assembly
//!   - **users**: the SQLite user store
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: data resources that can be read by clients
//!   - **prompts**: prompt templates for the client to fill in
//!
//! # Example
//!
//! ```rust,no_run
//! use skill_mcp_server::core::{Config, McpServer, serve};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     serve(McpServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
