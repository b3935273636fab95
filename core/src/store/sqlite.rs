//! SQLite-backed profile: one database file = one local storage area.

use super::LocalStorage;
use crate::error::ManagerResult;
use rusqlite::{params, Connection, OptionalExtension};

pub struct ProfileStore {
    conn: Connection,
}

impl ProfileStore {
    /// Open (or create) the profile database at `path`.
    pub fn open(path: &str) -> ManagerResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only matters for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ManagerResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> ManagerResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_local_storage.sql"))?;
        Ok(())
    }

    /// Number of stored keys (for tests).
    pub fn key_count(&self) -> ManagerResult<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM local_storage",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

impl LocalStorage for ProfileStore {
    fn get_item(&self, key: &str) -> ManagerResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> ManagerResult<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> ManagerResult<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}
