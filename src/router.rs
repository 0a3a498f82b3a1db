use crate::app::AppState;
use crate::domain::listing::ListingCategory;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{admin, auth, billing, browse, favorites, landlord, settings};
use crate::responses::assets::static_response;
use crate::responses::redirect::SESSION_COOKIE;
use astra::Request;
use std::io::Read;
use url::form_urlencoded;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => browse::home(state, &req),
        ("GET", ["static", name]) => static_response(name),

        ("GET", ["favorites"]) => favorites::index(state, &req),
        ("POST", ["favorites", "toggle"]) => favorites::toggle(state, req),
        ("POST", ["favorites", "clear"]) => favorites::clear(state),

        ("GET", ["landlord", "login"]) => auth::login_form(state, &req),
        ("POST", ["landlord", "login"]) => auth::login(state, req),
        ("POST", ["landlord", "signup"]) => auth::signup(state, req),
        ("POST", ["landlord", "logout"]) => auth::logout(state),

        ("GET", ["landlord", "dashboard"]) => landlord::dashboard(state, &req),
        ("GET", ["landlord", "listings", "new"]) => landlord::new_listing_form(state, &req),
        ("POST", ["landlord", "listings", "new"]) => landlord::create_listing(state, req),
        ("GET", ["landlord", "listings", id, "edit"]) => {
            let id = parse_id(id)?;
            landlord::edit_listing_form(state, &req, id)
        }
        ("POST", ["landlord", "listings", id, "edit"]) => {
            let id = parse_id(id)?;
            landlord::update_listing(state, req, id)
        }
        ("GET", ["landlord", "map-preview"]) => landlord::map_preview_fragment(state, &req),
        ("POST", ["landlord", "photos", "crop"]) => landlord::crop_photo(state, req),

        ("GET", ["landlord", "billing"]) => billing::overview(state, &req),
        ("POST", ["landlord", "billing", "checkout"]) => billing::checkout(state, req),
        ("POST", ["landlord", "billing", "cancel"]) => billing::cancel(state, req),
        ("POST", ["landlord", "billing", "portal"]) => billing::portal(state, &req),

        ("GET", ["landlord", "settings"]) => settings::show(state, &req),
        ("POST", ["landlord", "settings", "profile"]) => settings::update_profile(state, req),
        ("POST", ["landlord", "settings", "password"]) => settings::change_password(state, req),

        ("GET", ["admin"]) => admin::review_queue(state, &req),
        ("POST", ["admin", "listings", id, "approve"]) => {
            let id = parse_id(id)?;
            admin::approve(state, &req, id)
        }
        ("POST", ["admin", "listings", id, "reject"]) => {
            let id = parse_id(id)?;
            admin::reject(state, &req, id)
        }

        ("GET", ["listings"]) => browse::listings(state, &req, None),
        ("GET", [prefix]) => match ListingCategory::from_route(prefix) {
            Some(category) => browse::listings(state, &req, Some(category)),
            None => Err(ServerError::NotFound),
        },
        ("GET", [prefix, slug]) => match ListingCategory::from_route(prefix) {
            Some(category) => browse::detail(state, &req, category, slug),
            None => Err(ServerError::NotFound),
        },

        _ => Err(ServerError::NotFound),
    }
}

/// Numeric path segments only; anything else is an unknown URL.
fn parse_id(segment: &str) -> Result<u64, ServerError> {
    segment.parse().map_err(|_| ServerError::NotFound)
}

/// Decoded query pairs, in order of appearance.
pub(crate) fn parse_query(req: &Request) -> Vec<(String, String)> {
    match req.uri().query() {
        Some(query) => form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect(),
        None => Vec::new(),
    }
}

/// Reads and decodes an urlencoded form body.
pub(crate) fn form_fields(req: &mut Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut raw)
        .map_err(|_| ServerError::BadRequest("could not read the request body".to_string()))?;
    Ok(form_urlencoded::parse(&raw).into_owned().collect())
}

/// The raw session token from the cookie header, if any.
pub(crate) fn session_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    header.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}
