use crate::db::connection::Database;
use crate::db::state;
use crate::errors::ServerError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Where the persisted stores keep their JSON snapshots. The server
/// runs on sqlite; tests swap in the in-memory map.
pub trait StateBackend: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn save(&self, key: &str, value: &str) -> Result<(), ServerError>;
    fn remove(&self, key: &str) -> Result<(), ServerError>;
}

pub struct SqliteBackend {
    db: Database,
}

impl SqliteBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl StateBackend for SqliteBackend {
    fn load(&self, key: &str) -> Result<Option<String>, ServerError> {
        state::load_state(&self.db, key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ServerError> {
        state::save_state(&self.db, key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        state::remove_state(&self.db, key)
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>, ServerError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.remove(key);
        Ok(())
    }
}
