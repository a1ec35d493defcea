//! SQLite database schema for uninotas

use rusqlite::Connection;

use crate::error::{Result, UninotasError};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
-- Local accounts
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    salt TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Saved course results; seq keeps insertion order
CREATE TABLE IF NOT EXISTS records (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    owner TEXT NOT NULL,
    course_name TEXT NOT NULL,
    first_score INTEGER NOT NULL CHECK (first_score BETWEEN 0 AND 500),
    second_score INTEGER NOT NULL CHECK (second_score BETWEEN 0 AND 500),
    outcome TEXT NOT NULL CHECK (outcome IN ('required', 'already_passed', 'impossible')),
    required_score REAL,
    semester TEXT NOT NULL,
    created_at TEXT NOT NULL,
    CHECK ((outcome = 'required') = (required_score IS NOT NULL))
);
CREATE INDEX IF NOT EXISTS idx_records_owner ON records(owner);

-- Current session (at most one row)
CREATE TABLE IF NOT EXISTS session (
    slot INTEGER PRIMARY KEY CHECK (slot = 1),
    kind TEXT NOT NULL CHECK (kind IN ('guest', 'user')),
    user_id TEXT,
    started_at TEXT NOT NULL
);

-- Store metadata
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

/// Create tables if missing and check the stored schema version
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    let stored: Option<i32> = conn
        .query_row(
            "SELECT value FROM meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0),
        )
        .ok()
        .and_then(|s| s.parse().ok());

    match stored {
        None => {
            conn.execute(
                "INSERT OR REPLACE INTO meta (key, value) VALUES ('schema_version', ?1)",
                [CURRENT_SCHEMA_VERSION.to_string()],
            )?;
            tracing::debug!(version = CURRENT_SCHEMA_VERSION, "created schema");
        }
        Some(v) if v > CURRENT_SCHEMA_VERSION => {
            return Err(UninotasError::InvalidStore {
                reason: format!(
                    "database schema version {} is newer than supported version {}",
                    v, CURRENT_SCHEMA_VERSION
                ),
            });
        }
        Some(_) => {}
    }

    Ok(())
}
