//! Prompts domain module.
//!
//! Prompts are templates the calling agent fills with arguments and then
//! uses itself; this server never executes them.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and rendering
//! - `templates.rs` - Single-pass `{{name}}` rendering
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file in `definitions/` (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
