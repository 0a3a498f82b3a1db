use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn toggle_saves_a_snapshot_and_returns_the_heart() {
    let state = test_state(StubApi {
        listings: vec![sample_listing(1, "Cozy one bed")],
        ..Default::default()
    });

    let resp = handle(post_form("/favorites/toggle", "id=1"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let fragment = body_string(resp);
    assert!(fragment.contains("favorite-toggle active"));
    assert!(fragment.contains("Saved"));
    assert!(state.favorites.is_favorite(1));

    // The saved snapshot renders the page, not a fresh fetch.
    let page = body_string(handle(get("/favorites"), &state).unwrap());
    assert!(page.contains("Cozy one bed"));
    assert!(page.contains("$1,200/mo"));
}

#[test]
fn toggle_removes_on_second_press() {
    let state = test_state(StubApi {
        listings: vec![sample_listing(1, "Cozy one bed")],
        ..Default::default()
    });

    handle(post_form("/favorites/toggle", "id=1"), &state).unwrap();
    let resp = handle(post_form("/favorites/toggle", "id=1"), &state).unwrap();

    let fragment = body_string(resp);
    assert!(!fragment.contains("active"));
    assert!(fragment.contains("Save"));
    assert!(!state.favorites.is_favorite(1));
}

#[test]
fn toggle_needs_a_real_listing() {
    let state = test_state(StubApi::default());

    assert_eq!(
        handle(post_form("/favorites/toggle", "id=999"), &state).unwrap_err(),
        ServerError::NotFound
    );
    assert!(matches!(
        handle(post_form("/favorites/toggle", "id=abc"), &state).unwrap_err(),
        ServerError::BadRequest(_)
    ));
}

#[test]
fn nav_badge_counts_saved_listings() {
    let state = test_state(StubApi {
        listings: vec![
            sample_listing(1, "Cozy one bed"),
            sample_listing(2, "Two bed with porch"),
        ],
        ..Default::default()
    });
    handle(post_form("/favorites/toggle", "id=1"), &state).unwrap();
    handle(post_form("/favorites/toggle", "id=2"), &state).unwrap();

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("class=\"badge\">2</span>"));
}

#[test]
fn clear_empties_the_store_and_redirects() {
    let state = test_state(StubApi {
        listings: vec![sample_listing(1, "Cozy one bed")],
        ..Default::default()
    });
    handle(post_form("/favorites/toggle", "id=1"), &state).unwrap();

    let resp = handle(post_form("/favorites/clear", ""), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/favorites");
    assert_eq!(state.favorites.count(), 0);
}

#[test]
fn empty_favorites_page_points_back_at_rentals() {
    let state = test_state(StubApi::default());

    let body = body_string(handle(get("/favorites"), &state).unwrap());
    assert!(body.contains("You haven't saved any listings yet."));
    assert!(body.contains("href=\"/rentals\""));
}
