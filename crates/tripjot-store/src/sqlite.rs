//! SQLite-backed key-value backend
//!
//! Persists the preference list across sessions in a single kv table.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use crate::backend::KeyValueBackend;
use crate::errors::{from_rusqlite, Result};

/// Durable key-value backend over a SQLite database
///
/// The database layout is an implementation detail of this backend, not a
/// contract: one `kv` table keyed by the well-known preference key.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (or create) a database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| from_rusqlite("open", e))?;
        Self::with_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| from_rusqlite("open", e))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| from_rusqlite("create_schema", e))?;

        Ok(Self { conn })
    }
}

impl KeyValueBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| from_rusqlite("get", e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, value],
            )
            .map_err(|e| from_rusqlite("set", e))?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])
            .map_err(|e| from_rusqlite("remove", e))?;

        Ok(())
    }
}
