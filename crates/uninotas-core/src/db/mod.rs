//! SQLite database module for uninotas

mod accounts;
mod records;
mod schema;

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::error::{Result, UninotasError};

pub use accounts::{Account, SessionRow};
pub use schema::{create_schema, CURRENT_SCHEMA_VERSION};

/// Database file name inside the store root
pub const DB_FILE: &str = "uninotas.db";

/// SQLite database for uninotas
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given store root
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(DB_FILE);

        let conn = Connection::open(&db_path).map_err(|e| {
            UninotasError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| UninotasError::db_operation("enable WAL mode", e))?;

        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| UninotasError::db_operation("open in-memory database", e))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        create_schema(&conn)?;
        Ok(Database { conn })
    }

    /// Stored schema version
    pub fn schema_version(&self) -> Result<i32> {
        let value: String = self.conn.query_row(
            "SELECT value FROM meta WHERE key = 'schema_version'",
            [],
            |r| r.get(0),
        )?;
        value
            .parse()
            .map_err(|_| UninotasError::InvalidStore {
                reason: format!("unreadable schema version: {}", value),
            })
    }
}

pub(crate) fn parse_timestamp(column: &str, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| UninotasError::InvalidStore {
            reason: format!("bad {} timestamp {:?}: {}", column, raw, e),
        })
}
