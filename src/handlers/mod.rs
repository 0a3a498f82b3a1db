use crate::app::AppState;
use crate::domain::user::AuthUser;
use crate::errors::ResultResp;
use crate::responses::see_other;
use crate::router;
use crate::templates::NavVm;
use astra::Request;
use url::form_urlencoded;

pub mod admin;
pub mod auth;
pub mod billing;
pub mod browse;
pub mod favorites;
pub mod landlord;
pub mod settings;

/// The signed-in user, but only when the request carries a session
/// cookie matching the stored digest.
pub(crate) fn current_user(state: &AppState, req: &Request) -> Option<AuthUser> {
    let token = router::session_token(req)?;
    state.auth.verify(&token)
}

pub(crate) fn nav(state: &AppState, user: Option<&AuthUser>) -> NavVm {
    NavVm {
        signed_in: user.is_some(),
        is_admin: user.is_some_and(|user| user.is_admin()),
        favorites_count: state.favorites.count(),
    }
}

/// Bounce an anonymous visitor to the login page, remembering where
/// they were headed.
pub(crate) fn redirect_to_login(target: &str) -> ResultResp {
    let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
    see_other(&format!("/landlord/login?returnUrl={encoded}"))
}

/// Only site-local paths may be used as a post-login destination.
pub(crate) fn safe_return_url(raw: Option<&str>) -> Option<String> {
    let url = raw?.trim();
    if url.starts_with('/') && !url.starts_with("//") {
        Some(url.to_string())
    } else {
        None
    }
}

/// First non-blank value for `name` among parsed form or query pairs.
pub(crate) fn field<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}
