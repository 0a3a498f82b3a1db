use crate::domain::listing::Listing;

/// Used when a listing carries neither a neighborhood nor a city.
const FALLBACK_LOCATION: &str = "syracuse";

/// SEO path segment for a listing: `{location}-{beds}bed-{id}`.
///
/// The location part prefers the neighborhood field, then the city up
/// to its first comma. Everything after the final `-{id}` is what the
/// decoder keys on, so the location part needs no escaping.
pub fn listing_slug(listing: &Listing) -> String {
    let source = listing
        .location
        .as_deref()
        .filter(|location| !location.trim().is_empty())
        .unwrap_or_else(|| {
            let city = listing.city.split(',').next().unwrap_or("");
            if city.trim().is_empty() {
                FALLBACK_LOCATION
            } else {
                city
            }
        });
    format!(
        "{}-{}bed-{}",
        sanitize_location(source),
        listing.beds,
        listing.id
    )
}

/// Lowercases, drops everything outside `[a-z0-9 -]`, and turns each
/// run of spaces and hyphens into a single hyphen.
fn sanitize_location(raw: &str) -> String {
    let mut out = String::new();
    let mut pending_hyphen = false;
    for ch in raw.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }
    out
}

/// Pulls the listing id back out of a slug. The id is the trailing
/// digit run, which must directly follow a hyphen; anything else is
/// not a listing slug.
pub fn listing_id_from_slug(slug: &str) -> Option<u64> {
    let rest = slug.trim_end_matches(|c: char| c.is_ascii_digit());
    if rest.len() == slug.len() || !rest.ends_with('-') {
        return None;
    }
    slug[rest.len()..].parse().ok()
}

/// Canonical detail-page path, e.g. `/rentals/westcott-3bed-42`.
pub fn detail_path(listing: &Listing) -> String {
    format!(
        "/{}/{}",
        listing.category().route_prefix(),
        listing_slug(listing)
    )
}
