//! Slot read and write queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SLOT_SQL: &str = "SELECT value FROM slots WHERE key = ?1";
const UPSERT_SLOT_SQL: &str = "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Reads the value stored under a key.
    pub fn read_slot(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read slot")
    }

    /// Stores a value under a key, replacing any previous value.
    pub fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SLOT_SQL, params![key, value, now])
            .db_context("Failed to write slot")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;

    #[test]
    fn test_read_missing_slot() {
        let db = Database::in_memory().unwrap();
        assert_eq!(db.read_slot("missing").unwrap(), None);
    }

    #[test]
    fn test_write_then_overwrite_slot() {
        let db = Database::in_memory().unwrap();
        db.write_slot("key", "first").unwrap();
        db.write_slot("key", "second").unwrap();
        assert_eq!(db.read_slot("key").unwrap().as_deref(), Some("second"));
    }
}
