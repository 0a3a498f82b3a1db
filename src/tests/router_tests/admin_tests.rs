use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;
use std::sync::Arc;

#[test]
fn review_queue_lists_pending_listings() {
    let state = test_state(StubApi {
        pending: vec![
            sample_listing(31, "Unreviewed duplex"),
            sample_listing(32, "Unreviewed studio"),
        ],
        ..Default::default()
    });
    let cookie = sign_in(&state, admin());

    let resp = handle(get_with_cookie("/admin", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Review queue"));
    assert!(body.contains("Unreviewed duplex"));
    assert!(body.contains("Unreviewed studio"));
    assert!(body.contains("/admin/listings/31/approve"));
    assert!(body.contains("/admin/listings/32/reject"));
}

#[test]
fn anonymous_visitors_are_sent_to_login() {
    let state = test_state(StubApi::default());

    let resp = handle(get("/admin"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        location_header(&resp),
        "/landlord/login?returnUrl=%2Fadmin"
    );
}

#[test]
fn landlords_cannot_open_the_review_queue() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let err = handle(get_with_cookie("/admin", &cookie), &state).unwrap_err();
    assert_eq!(
        err,
        ServerError::Forbidden("Administrator access is required.".to_string())
    );
}

#[test]
fn user_level_grants_admin_access_too() {
    let state = test_state(StubApi::default());
    let mut reviewer = landlord();
    reviewer.role = None;
    reviewer.user_level = Some(9);
    let cookie = sign_in(&state, reviewer);

    let resp = handle(get_with_cookie("/admin", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn approving_posts_upstream_and_confirms() {
    let api = Arc::new(StubApi {
        pending: vec![sample_listing(31, "Unreviewed duplex")],
        ..Default::default()
    });
    let state = state_over(api.clone());
    let cookie = sign_in(&state, admin());

    let resp = handle(
        post_form_with_cookie("/admin/listings/31/approve", "", &cookie),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/admin?approved=1");
    assert_eq!(*api.approved.lock().unwrap(), vec![31]);

    let body = body_string(handle(get_with_cookie("/admin?approved=1", &cookie), &state).unwrap());
    assert!(body.contains("Listing approved. It is now live."));
}

#[test]
fn rejecting_posts_upstream_and_confirms() {
    let api = Arc::new(StubApi {
        pending: vec![sample_listing(31, "Unreviewed duplex")],
        ..Default::default()
    });
    let state = state_over(api.clone());
    let cookie = sign_in(&state, admin());

    let resp = handle(
        post_form_with_cookie("/admin/listings/31/reject", "", &cookie),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/admin?rejected=1");
    assert_eq!(*api.rejected.lock().unwrap(), vec![31]);
}

#[test]
fn decisions_are_admin_only() {
    let api = Arc::new(StubApi {
        pending: vec![sample_listing(31, "Unreviewed duplex")],
        ..Default::default()
    });
    let state = state_over(api.clone());
    let cookie = sign_in(&state, landlord());

    let err = handle(
        post_form_with_cookie("/admin/listings/31/approve", "", &cookie),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::Forbidden(_)));
    assert!(api.approved.lock().unwrap().is_empty());
}

#[test]
fn non_numeric_listing_ids_are_not_found() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, admin());

    let err = handle(
        post_form_with_cookie("/admin/listings/not-a-number/approve", "", &cookie),
        &state,
    )
    .unwrap_err();
    assert_eq!(err, ServerError::NotFound);
}
