//! Skills domain module.
//!
//! A skill is a folder under the configured skills root holding a `SKILL.md`
//! guide and optional templates or resource files. A separate catalog
//! document lists every skill with a short description.
//!
//! ## Architecture
//!
//! - `store.rs` - Read-only artifact access and the missing-file policy
//! - `catalog.rs` - Catalog document parser
//! - `guide.rs` - Guide assembly and lookup by name
//! - `error.rs` - Skill-specific error types

pub mod catalog;
mod error;
pub mod guide;
pub mod store;

pub use catalog::SkillRecord;
pub use error::SkillError;
pub use guide::{GUIDE_FILE, GuideAssembler, GuideLayout, ResourceSection, SkillGuide, TemplateSection};
pub use store::{ArtifactStore, EntryFilter, MissingPolicy};
