use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn home_page_shows_featured_listings() {
    let state = test_state(StubApi {
        featured: vec![
            sample_listing(1, "3 Bed on Euclid"),
            sample_listing(2, "Studio near campus"),
        ],
        ..Default::default()
    });

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Find your next place in Syracuse, NY"));
    assert!(body.contains("3 Bed on Euclid"));
    assert!(body.contains("Studio near campus"));
    // Category nav comes from the layout.
    assert!(body.contains("href=\"/rentals\""));
    assert!(body.contains("href=\"/short-term\""));
}

#[test]
fn home_page_survives_a_feed_outage() {
    let state = test_state(StubApi {
        feed_error: Some(ServerError::Network("connection refused".to_string())),
        ..Default::default()
    });

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Something went wrong. Please try again later."));
}

#[test]
fn category_page_filters_and_sorts_locally() {
    // The stub returns the whole feed for any query, so everything the
    // page drops or reorders happened in this app.
    let mut cheap = sample_listing(1, "Cozy one bed");
    cheap.rent = Some(800);
    let mut mid = sample_listing(2, "Two bed with porch");
    mid.rent = Some(950);
    let mut expensive = sample_listing(3, "Luxury loft");
    expensive.rent = Some(2400);

    let state = test_state(StubApi {
        listings: vec![expensive, cheap, mid],
        ..Default::default()
    });

    let resp = handle(get("/rentals?maxRent=1000&sort=price_asc"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("2 places"));
    assert!(!body.contains("Luxury loft"));
    let first = body.find("Cozy one bed").unwrap();
    let second = body.find("Two bed with porch").unwrap();
    assert!(first < second, "cheapest listing should render first");
}

#[test]
fn category_page_paginates_past_twenty_four() {
    let listings: Vec<_> = (1..=25)
        .map(|i| sample_listing(i, &format!("Listing number {i}")))
        .collect();
    let state = test_state(StubApi {
        listings,
        ..Default::default()
    });

    let first = body_string(handle(get("/rentals"), &state).unwrap());
    assert!(first.contains("25 places"));
    assert!(first.contains("Listing number 1"));
    assert!(!first.contains("Listing number 25"));
    assert!(first.contains("page=2"));

    let second = body_string(handle(get("/rentals?page=2"), &state).unwrap());
    assert!(second.contains("Listing number 25"));
    assert!(!second.contains("Listing number 24"));
}

#[test]
fn filtered_page_offers_to_clear_filters() {
    let state = test_state(StubApi {
        listings: vec![sample_listing(1, "Cozy one bed")],
        ..Default::default()
    });

    let body = body_string(handle(get("/rentals?maxRent=100"), &state).unwrap());
    assert!(body.contains("No listings match your filters."));
    assert!(body.contains("Clear filters"));
}

#[test]
fn combined_feed_renders_every_category() {
    let state = test_state(StubApi {
        listings: vec![sample_listing(1, "Cozy one bed")],
        ..Default::default()
    });

    let body = body_string(handle(get("/listings"), &state).unwrap());
    assert!(body.contains("All listings"));
    assert!(body.contains("Cozy one bed"));
}

#[test]
fn unknown_category_is_not_found() {
    let state = test_state(StubApi::default());
    assert_eq!(
        handle(get("/condos"), &state).unwrap_err(),
        ServerError::NotFound
    );
}

#[test]
fn detail_page_keys_on_the_slug_id() {
    let mut listing = sample_listing(7, "3 Bed on Euclid");
    listing.details = Some("Hardwood floors throughout.".to_string());
    let state = test_state(StubApi {
        listings: vec![listing],
        ..Default::default()
    });

    // Only the trailing id matters; the location words are decoration.
    let resp = handle(get("/rentals/anything-at-all-7"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("3 Bed on Euclid"));
    assert!(body.contains("Hardwood floors throughout."));
    assert!(body.contains("713 Euclid Ave"));
}

#[test]
fn detail_page_rejects_bad_slugs() {
    let state = test_state(StubApi {
        listings: vec![sample_listing(7, "3 Bed on Euclid")],
        ..Default::default()
    });

    // No trailing id.
    assert_eq!(
        handle(get("/rentals/westcott-loft"), &state).unwrap_err(),
        ServerError::NotFound
    );
    // Valid slug shape, unknown listing.
    assert_eq!(
        handle(get("/rentals/westcott-3bed-999"), &state).unwrap_err(),
        ServerError::NotFound
    );
}
