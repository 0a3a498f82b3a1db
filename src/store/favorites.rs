use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::store::backend::StateBackend;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

const FAVORITES_KEY: &str = "favorites";

/// Snapshot shape on disk. Wrapping the list keeps room for future
/// fields without breaking old snapshots.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedFavorites {
    items: Vec<Listing>,
}

/// Saved listings, stored as full snapshots so a favorite stays
/// renderable after the listing leaves the feed. Deduplicated by
/// listing id, insertion order preserved.
pub struct FavoritesStore {
    backend: Arc<dyn StateBackend>,
    items: RwLock<Vec<Listing>>,
}

impl FavoritesStore {
    pub fn open(backend: Arc<dyn StateBackend>) -> Result<Self, ServerError> {
        let items = match backend.load(FAVORITES_KEY)? {
            Some(raw) => match serde_json::from_str::<PersistedFavorites>(&raw) {
                Ok(parsed) => parsed.items,
                Err(err) => {
                    warn!("discarding unreadable favorites snapshot: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(Self {
            backend,
            items: RwLock::new(items),
        })
    }

    pub fn all(&self) -> Vec<Listing> {
        self.read().clone()
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// Ids only, for marking hearts across a whole grid in one lock.
    pub fn ids(&self) -> HashSet<u64> {
        self.read().iter().map(|listing| listing.id).collect()
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.read().iter().any(|listing| listing.id == id)
    }

    /// Saves a snapshot unless the listing is already favorited.
    pub fn add(&self, listing: Listing) -> Result<(), ServerError> {
        let mut items = self.write();
        if items.iter().any(|l| l.id == listing.id) {
            return Ok(());
        }
        items.push(listing);
        self.persist(&items)
    }

    pub fn remove(&self, id: u64) -> Result<(), ServerError> {
        let mut items = self.write();
        let Some(index) = items.iter().position(|l| l.id == id) else {
            return Ok(());
        };
        items.remove(index);
        self.persist(&items)
    }

    pub fn clear(&self) -> Result<(), ServerError> {
        let mut items = self.write();
        items.clear();
        self.backend.remove(FAVORITES_KEY)
    }

    fn persist(&self, items: &[Listing]) -> Result<(), ServerError> {
        let snapshot = PersistedFavorites {
            items: items.to_vec(),
        };
        let json = serde_json::to_string(&snapshot)
            .map_err(|e| ServerError::DbError(format!("Serialize favorites failed: {e}")))?;
        self.backend.save(FAVORITES_KEY, &json)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Listing>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Listing>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}
