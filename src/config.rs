use std::env;
use std::time::Duration;

/// Runtime settings, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote listings API, without a trailing slash.
    pub api_base_url: String,
    /// Address the HTML server binds to.
    pub bind_addr: String,
    /// Sqlite file backing the persisted browser-state stores.
    pub state_db_path: String,
    /// Deadline applied to every upstream request. Doubles as the
    /// cancellation policy: a stale request stops consuming a worker
    /// once the deadline passes.
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url = env::var("RENTALS_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
            .trim_end_matches('/')
            .to_string();
        let bind_addr =
            env::var("RENTALS_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let state_db_path =
            env::var("RENTALS_STATE_DB").unwrap_or_else(|_| "client_state.sqlite3".to_string());
        let timeout_secs = env::var("RENTALS_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(10);

        AppConfig {
            api_base_url,
            bind_addr,
            state_db_path,
            http_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            state_db_path: "client_state.sqlite3".to_string(),
            http_timeout: Duration::from_secs(10),
        }
    }
}
