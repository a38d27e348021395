//! Users domain module.
//!
//! A small relational store behind the user CRUD tools. The database path
//! comes from configuration; the schema is provisioned outside this server.

mod error;
pub mod store;

pub use error::StorageError;
pub use store::{UserRow, UserStore, format_table};
