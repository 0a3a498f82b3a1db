use crate::api::HttpApi;
use crate::app::AppState;
use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::store::{AuthStore, FavoritesStore, SqliteBackend};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod imaging;
mod responses;
mod router;
mod search;
mod slug;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("invalid bind address {:?}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    let db = Database::new(&config.state_db_path);
    if let Err(e) = init_db(&db) {
        error!("state database initialization failed: {e}");
        std::process::exit(1);
    }

    let backend = Arc::new(SqliteBackend::new(db));
    let auth = match AuthStore::open(backend.clone()) {
        Ok(store) => store,
        Err(e) => {
            error!("could not open the auth store: {e}");
            std::process::exit(1);
        }
    };
    let favorites = match FavoritesStore::open(backend) {
        Ok(store) => store,
        Err(e) => {
            error!("could not open the favorites store: {e}");
            std::process::exit(1);
        }
    };

    let api = match HttpApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            error!("could not build the API client: {e}");
            std::process::exit(1);
        }
    };

    info!(api = %config.api_base_url, "starting server at http://{addr}");

    let state = Arc::new(AppState {
        config,
        api: Arc::new(api),
        auth,
        favorites,
    });

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }
}
