//! Namespaced key → JSON-value record store over embedded SQLite.
//!
//! The public surface fails soft: `get` returns `None` and the mutators
//! return `false` on any underlying I/O or (de)serialization error, so
//! callers never have to handle a hard storage failure. Every swallowed
//! error is logged.

use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

pub struct RecordStore {
    conn: Mutex<Connection>,
}

impl RecordStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;
        init_schema(&conn)?;

        info!("Record store opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Private in-memory namespace, used by tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Fetches and deserializes the value at `key`. Absent key, read error
    /// and deserialize error all collapse to `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("get '{}' failed: {}", key, e);
                None
            }
        }
    }

    /// Replaces the entire value at `key`. Returns `false` on failure.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match self.try_set(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!("set '{}' failed: {}", key, e);
                false
            }
        }
    }

    /// Deletes `key`. Idempotent: removing an absent key still reports
    /// success.
    pub fn remove(&self, key: &str) -> bool {
        match self.with_conn(|conn| {
            conn.execute("DELETE FROM records WHERE key = ?1", [key])?;
            Ok(())
        }) {
            Ok(()) => true,
            Err(e) => {
                warn!("remove '{}' failed: {}", key, e);
                false
            }
        }
    }

    /// Drops every key in the namespace.
    pub fn clear(&self) -> bool {
        match self.with_conn(|conn| {
            conn.execute("DELETE FROM records", [])?;
            Ok(())
        }) {
            Ok(()) => true,
            Err(e) => {
                warn!("clear failed: {}", e);
                false
            }
        }
    }

    /// True if `key` holds a value. Deserialization is not attempted.
    pub fn contains(&self, key: &str) -> bool {
        self.with_conn(|conn| {
            let found: Option<i64> = conn
                .query_row("SELECT 1 FROM records WHERE key = ?1", [key], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(found.is_some())
        })
        .unwrap_or(false)
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw: Option<String> = self.with_conn(|conn| {
            let row = conn
                .query_row("SELECT value FROM records WHERE key = ?1", [key], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(row)
        })?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn try_set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO records (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                (key, &json),
            )?;
            Ok(())
        })
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("store lock poisoned: {}", e))?;
        f(&conn)
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS records (
            key     TEXT PRIMARY KEY,
            value   TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
