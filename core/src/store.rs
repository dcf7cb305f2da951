//! SQLite persistence — named save slots for suspended reigns.
//!
//! RULE: Only store.rs talks to the database. The engine never sees SQL;
//! it hands over a GameSnapshot and gets one back.

use crate::{
    error::{GameError, GameResult},
    snapshot::GameSnapshot,
};
use rusqlite::{params, Connection, OptionalExtension};

pub struct SaveStore {
    conn: Connection,
}

/// One row of the save list, for the load dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEntry {
    pub name:     String,
    pub saved_at: String,
}

impl SaveStore {
    /// Open (or create) the save database at `path`.
    pub fn open(path: &str) -> GameResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only works on real files; ignore the refusal elsewhere.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> GameResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply the schema.
    pub fn migrate(&self) -> GameResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_saves.sql"))?;
        Ok(())
    }

    /// Write the slot `name`, replacing any reign already saved under it.
    pub fn save_game(&self, name: &str, snapshot: &GameSnapshot) -> GameResult<()> {
        let payload = serde_json::to_string(snapshot)?;
        let saved_at = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO save (name, saved_at, payload) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET saved_at = ?2, payload = ?3",
            params![name, saved_at, payload],
        )?;
        log::debug!("saved reign '{name}'");
        Ok(())
    }

    /// Read back the slot `name`.
    pub fn load_game(&self, name: &str) -> GameResult<GameSnapshot> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM save WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        let payload = payload.ok_or_else(|| GameError::SaveNotFound {
            name: name.to_string(),
        })?;
        Ok(serde_json::from_str(&payload)?)
    }

    /// Every slot, most recently saved first.
    pub fn list_saves(&self) -> GameResult<Vec<SaveEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, saved_at FROM save
             ORDER BY saved_at DESC, name ASC",
        )?;
        let entries = stmt
            .query_map([], |row| {
                Ok(SaveEntry {
                    name:     row.get(0)?,
                    saved_at: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn has_saves(&self) -> GameResult<bool> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM save", [], |row| row.get(0))?;
        Ok(count > 0)
    }
}
