use crate::errors::ResultResp;
use astra::{Body, ResponseBuilder};

pub const SESSION_COOKIE: &str = "session";

/// 303 redirect, the post-form pattern for every mutating route.
pub fn see_other(location: &str) -> ResultResp {
    Ok(ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .unwrap())
}

/// 303 redirect that also sets or clears the session cookie.
pub fn see_other_with_cookie(location: &str, cookie: &str) -> ResultResp {
    Ok(ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .header("Set-Cookie", cookie)
        .body(Body::empty())
        .unwrap())
}

pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
