use crate::api::RentalsApi;
use crate::config::AppConfig;
use crate::store::{AuthStore, FavoritesStore};
use std::sync::Arc;

/// Shared state every request handler sees. Built once in `main` and
/// captured by the server closure; router tests build their own with a
/// stub API and in-memory stores.
pub struct AppState {
    pub config: AppConfig,
    pub api: Arc<dyn RentalsApi>,
    pub auth: AuthStore,
    pub favorites: FavoritesStore,
}
