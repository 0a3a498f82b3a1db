pub mod auth;
pub mod backend;
pub mod favorites;
pub mod session;

pub use auth::AuthStore;
pub use backend::{MemoryBackend, SqliteBackend, StateBackend};
pub use favorites::FavoritesStore;
