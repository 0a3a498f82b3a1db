use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

/// Reads one store snapshot, `None` when the key was never written.
pub fn load_state(db: &Database, key: &str) -> Result<Option<String>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            "SELECT value FROM client_state WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("Load state '{key}' failed: {e}")))
    })
}

/// Upserts one store snapshot.
pub fn save_state(db: &Database, key: &str, value: &str) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO client_state (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )
        .map_err(|e| ServerError::DbError(format!("Save state '{key}' failed: {e}")))?;
        Ok(())
    })
}

/// Deletes one store snapshot. Deleting a missing key is fine.
pub fn remove_state(db: &Database, key: &str) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute("DELETE FROM client_state WHERE key = ?1", params![key])
            .map_err(|e| ServerError::DbError(format!("Remove state '{key}' failed: {e}")))?;
        Ok(())
    })
}
