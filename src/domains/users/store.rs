//! SQLite-backed user table.
//!
//! Each operation opens its own connection and closes it before returning,
//! so no handle survives between calls.

use std::path::PathBuf;

use rusqlite::{Connection, params};
use serde::Serialize;
use tracing::{debug, info};

use super::error::StorageError;

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub city: String,
}

/// Access to the `users` table of a SQLite database file.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open a connection and close it again.
    pub fn ping(&self) -> Result<(), StorageError> {
        self.with_connection(|_| Ok(()))
    }

    /// All users, in table order.
    pub fn all(&self) -> Result<Vec<UserRow>, StorageError> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id, name, age, city FROM users")?;
            let rows = stmt
                .query_map([], map_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    /// Users living in `city`.
    pub fn by_city(&self, city: &str) -> Result<Vec<UserRow>, StorageError> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id, name, age, city FROM users WHERE city = ?1")?;
            let rows = stmt
                .query_map(params![city], map_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    /// Insert a user and commit. Returns the affected-row count.
    pub fn insert(&self, name: &str, age: i64, city: &str) -> Result<usize, StorageError> {
        self.with_connection(|conn| {
            let tx = conn.transaction()?;
            let affected = tx.execute(
                "INSERT INTO users (name, age, city) VALUES (?1, ?2, ?3)",
                params![name, age, city],
            )?;
            tx.commit()?;
            info!("Inserted user '{}' ({} row(s))", name, affected);
            Ok(affected)
        })
    }

    fn with_connection<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        debug!("Opening database {}", self.path.display());
        let mut conn =
            Connection::open(&self.path).map_err(|e| StorageError::open(&self.path, e))?;
        let result = f(&mut conn)?;
        conn.close().map_err(|(_, e)| StorageError::Close(e))?;
        Ok(result)
    }
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        city: row.get(3)?,
    })
}

/// Render rows as a pipe-separated table with a header line.
pub fn format_table(rows: &[UserRow]) -> String {
    let mut out = String::from("ID | Name | Age | City\n");
    for row in rows {
        out.push_str(&format!(
            "{} | {} | {} | {}\n",
            row.id, row.name, row.age, row.city
        ));
    }
    out
}
