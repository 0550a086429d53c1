//! `SQLite` storage layer for `notes_rust`.
//!
//! Owns the durable `notes` table and is the single source of truth:
//! - WAL mode for concurrent reads alongside the serialized writer
//! - `AUTOINCREMENT` ids, so an id is never reused within a store's lifetime
//! - Incompatible schema versions are dropped and recreated
//!   (`DropAndRecreateOnIncompatibleSchema`), wiping existing rows
//!
//! All callers outside tests go through [`crate::repo::NoteRepository`],
//! which serializes mutations onto a single worker lane.

use std::fs;
use std::path::Path;

use rusqlite::{Connection, params};
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{NewNote, Note};

/// Current schema version, stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

const NOTES_TABLE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS notes (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    title   TEXT NOT NULL,
    content TEXT NOT NULL
)";

/// `SQLite`-backed note store.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open or create a database at the given path.
    ///
    /// Creates parent directories if needed and applies the schema. A
    /// database with an incompatible `user_version` is dropped and
    /// recreated; callers accept that a schema change wipes data.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or directories cannot be created,
    /// or if `SQLite` rejects the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database. Used by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` rejects the schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Apply the schema, honoring the destructive version fallback.
    fn init_schema(conn: &Connection) -> Result<()> {
        let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version != 0 && version != SCHEMA_VERSION {
            // DropAndRecreateOnIncompatibleSchema: known data-loss risk,
            // accepted for a single fixed schema version.
            warn!(
                found = version,
                expected = SCHEMA_VERSION,
                "incompatible schema version, dropping note table"
            );
            conn.execute("DROP TABLE IF EXISTS notes", [])?;
            conn.execute("DELETE FROM sqlite_sequence WHERE name = 'notes'", [])
                .ok();
        }

        conn.execute(NOTES_TABLE_SCHEMA, [])?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        Ok(())
    }

    /// Insert a note and return the id the store assigned to it.
    ///
    /// Ids are strictly increasing in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on a storage fault.
    pub fn insert_note(&self, note: &NewNote) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO notes (title, content) VALUES (?1, ?2)",
            params![note.title, note.content],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, title = %note.title, "inserted note");
        Ok(id)
    }

    /// Delete the note with the given id.
    ///
    /// A missing id is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on a storage fault.
    pub fn delete_note(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        debug!(id, affected, "deleted note");
        Ok(())
    }

    /// Delete every note. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on a storage fault.
    pub fn delete_all_notes(&self) -> Result<()> {
        let affected = self.conn.execute("DELETE FROM notes", [])?;
        debug!(affected, "deleted all notes");
        Ok(())
    }

    /// All notes, ordered ascending by id (insertion order).
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on a storage fault.
    pub fn get_all_notes(&self) -> Result<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, content FROM notes ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Note {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
            })
        })?;
        let mut notes = Vec::new();
        for row in rows {
            notes.push(row?);
        }
        Ok(notes)
    }

    /// Number of notes currently in the table.
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on a storage fault.
    pub fn count_notes(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        let a = storage
            .insert_note(&NewNote::new("Groceries", "Milk, eggs"))
            .unwrap();
        let b = storage
            .insert_note(&NewNote::new("Todo", "Call Sam"))
            .unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);

        let notes = storage.get_all_notes().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "Groceries");
        assert_eq!(notes[0].content, "Milk, eggs");
        assert_eq!(notes[1].title, "Todo");
        assert_eq!(notes[1].content, "Call Sam");
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage.insert_note(&NewNote::new("a", "1")).unwrap();
        let b = storage.insert_note(&NewNote::new("b", "2")).unwrap();
        storage.delete_note(b).unwrap();

        let c = storage.insert_note(&NewNote::new("c", "3")).unwrap();
        assert!(c > b, "id {c} reused after deleting {b}");
    }

    #[test]
    fn test_delete_all_empties_table() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage.insert_note(&NewNote::new("a", "1")).unwrap();
        storage.insert_note(&NewNote::new("b", "2")).unwrap();
        storage.delete_all_notes().unwrap();
        assert!(storage.get_all_notes().unwrap().is_empty());
        assert_eq!(storage.count_notes().unwrap(), 0);
    }

    #[test]
    fn test_delete_all_on_empty_store_is_noop() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage.delete_all_notes().unwrap();
        assert!(storage.get_all_notes().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage.insert_note(&NewNote::new("a", "1")).unwrap();
        storage.delete_note(999).unwrap();
        assert_eq!(storage.count_notes().unwrap(), 1);
    }

    #[test]
    fn test_empty_fields_accepted_at_store_level() {
        // Emptiness validation is a caller concern; the store takes any text.
        let storage = SqliteStorage::open_in_memory().unwrap();
        let id = storage.insert_note(&NewNote::new("", "")).unwrap();
        let notes = storage.get_all_notes().unwrap();
        assert_eq!(notes[0].id, id);
        assert_eq!(notes[0].title, "");
    }

    #[test]
    fn test_reopen_preserves_rows_and_id_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("notes.db");

        let first;
        {
            let storage = SqliteStorage::open(&db).unwrap();
            first = storage.insert_note(&NewNote::new("persist", "me")).unwrap();
        }

        let storage = SqliteStorage::open(&db).unwrap();
        let notes = storage.get_all_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, first);

        let second = storage.insert_note(&NewNote::new("again", "too")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_incompatible_schema_version_drops_table() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("notes.db");

        {
            let storage = SqliteStorage::open(&db).unwrap();
            storage.insert_note(&NewNote::new("doomed", "row")).unwrap();
        }

        // Simulate a future incompatible schema.
        {
            let conn = Connection::open(&db).unwrap();
            conn.pragma_update(None, "user_version", 99).unwrap();
        }

        let storage = SqliteStorage::open(&db).unwrap();
        assert!(
            storage.get_all_notes().unwrap().is_empty(),
            "destructive fallback should have wiped the table"
        );
    }

    proptest! {
        #[test]
        fn prop_ids_strictly_increasing(titles in proptest::collection::vec(".{0,20}", 1..30)) {
            let storage = SqliteStorage::open_in_memory().unwrap();
            let mut last = 0;
            for title in &titles {
                let id = storage.insert_note(&NewNote::new(title.clone(), "x")).unwrap();
                prop_assert!(id > last, "id {} not greater than previous {}", id, last);
                last = id;
            }
        }

        #[test]
        fn prop_query_sorted_by_id(deletions in proptest::collection::vec(0..40i64, 0..20)) {
            let storage = SqliteStorage::open_in_memory().unwrap();
            for i in 0..40 {
                storage.insert_note(&NewNote::new(format!("n{i}"), "x")).unwrap();
            }
            for id in deletions {
                storage.delete_note(id).unwrap();
            }
            let notes = storage.get_all_notes().unwrap();
            for pair in notes.windows(2) {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
