//! Domains module containing business logic organized by bounded contexts.
//!
//! `skills` and `users` hold the data access; `tools`, `resources` and
//! `prompts` expose it over MCP.

pub mod prompts;
pub mod resources;
pub mod skills;
pub mod tools;
pub mod users;
