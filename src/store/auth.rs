use crate::domain::user::AuthUser;
use crate::errors::ServerError;
use crate::store::backend::StateBackend;
use crate::store::session;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

const AUTH_KEY: &str = "auth";

/// The persisted snapshot: the signed-in account plus the digest of
/// the active session token. The raw token only ever lives in the
/// browser cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedAuth {
    user: AuthUser,
    token_digest: String,
}

/// Signed-in account state, hydrated from the backend at startup and
/// written through on every change.
pub struct AuthStore {
    backend: Arc<dyn StateBackend>,
    state: RwLock<Option<PersistedAuth>>,
}

impl AuthStore {
    /// Hydrates from the persisted snapshot. An unreadable snapshot
    /// starts the store signed out rather than failing the boot.
    pub fn open(backend: Arc<dyn StateBackend>) -> Result<Self, ServerError> {
        let state = match backend.load(AUTH_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warn!("discarding unreadable auth snapshot: {err}");
                    None
                }
            },
            None => None,
        };
        Ok(Self {
            backend,
            state: RwLock::new(state),
        })
    }

    pub fn current(&self) -> Option<AuthUser> {
        self.read().as_ref().map(|state| state.user.clone())
    }

    /// Checks a session cookie token against the stored digest.
    pub fn verify(&self, token: &str) -> Option<AuthUser> {
        let guard = self.read();
        let state = guard.as_ref()?;
        if session::digests_match(&state.token_digest, &session::token_digest(token)) {
            Some(state.user.clone())
        } else {
            None
        }
    }

    /// Replaces the signed-in account and starts a fresh session.
    /// Returns the raw token for the cookie.
    pub fn sign_in(&self, user: AuthUser) -> Result<String, ServerError> {
        let token = session::new_session_token();
        let state = PersistedAuth {
            user,
            token_digest: session::token_digest(&token),
        };
        self.persist(&state)?;
        *self.write() = Some(state);
        Ok(token)
    }

    /// Swaps in updated account fields, keeping the session. Does
    /// nothing when signed out.
    pub fn update(&self, user: AuthUser) -> Result<(), ServerError> {
        let mut guard = self.write();
        let Some(state) = guard.as_mut() else {
            return Ok(());
        };
        let next = PersistedAuth {
            user,
            token_digest: state.token_digest.clone(),
        };
        self.persist(&next)?;
        *state = next;
        Ok(())
    }

    pub fn sign_out(&self) -> Result<(), ServerError> {
        self.backend.remove(AUTH_KEY)?;
        *self.write() = None;
        Ok(())
    }

    fn persist(&self, state: &PersistedAuth) -> Result<(), ServerError> {
        let json = serde_json::to_string(state)
            .map_err(|e| ServerError::DbError(format!("Serialize auth snapshot failed: {e}")))?;
        self.backend.save(AUTH_KEY, &json)
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<PersistedAuth>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<PersistedAuth>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
