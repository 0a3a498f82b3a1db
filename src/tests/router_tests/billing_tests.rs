use crate::domain::billing::SubscriptionDetails;
use crate::router::handle;
use crate::tests::utils::*;
use std::sync::Arc;

#[test]
fn overview_shows_each_listings_subscription() {
    let state = test_state(StubApi {
        listings: vec![sample_listing(7, "3 Bed on Euclid")],
        subscription: Some(SubscriptionDetails {
            status: "active".to_string(),
            current_period_end: Some(1780185600), // 2026-05-31
            cancel_at_period_end: false,
        }),
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let resp = handle(get_with_cookie("/landlord/billing", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("3 Bed on Euclid"));
    assert!(body.contains("status-badge active"));
    assert!(body.contains("Renews May 31, 2026"));
    assert!(body.contains("Cancel subscription"));
    assert!(body.contains("Open billing portal"));
}

#[test]
fn overview_offers_checkout_for_unbilled_listings() {
    // No subscription on file: the lookup 404s and the row degrades.
    let state = test_state(StubApi {
        listings: vec![sample_listing(7, "3 Bed on Euclid")],
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let body = body_string(handle(get_with_cookie("/landlord/billing", &cookie), &state).unwrap());
    assert!(body.contains("Status unavailable"));
    assert!(body.contains("Activate listing"));
    assert!(!body.contains("Cancel subscription"));
}

#[test]
fn ending_soon_rows_hide_the_cancel_button() {
    let state = test_state(StubApi {
        listings: vec![sample_listing(7, "3 Bed on Euclid")],
        subscription: Some(SubscriptionDetails {
            status: "active".to_string(),
            current_period_end: Some(1780185600),
            cancel_at_period_end: true,
        }),
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let body = body_string(handle(get_with_cookie("/landlord/billing", &cookie), &state).unwrap());
    assert!(body.contains("Ends May 31, 2026"));
    assert!(!body.contains("Cancel subscription"));
}

#[test]
fn checkout_redirects_to_the_stripe_page() {
    let state = test_state(StubApi {
        listings: vec![sample_listing(7, "3 Bed on Euclid")],
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie("/landlord/billing/checkout", "listing_id=7", &cookie),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(
        location_header(&resp),
        "https://checkout.stripe.example/c/cs_test_123"
    );
}

#[test]
fn cancel_records_the_subscription_and_confirms() {
    let api = Arc::new(StubApi {
        listings: vec![sample_listing(7, "3 Bed on Euclid")],
        ..Default::default()
    });
    let state = state_over(api.clone());
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie("/landlord/billing/cancel", "listing_id=7", &cookie),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/landlord/billing?ended=1");
    assert_eq!(*api.cancellations.lock().unwrap(), vec![(7, 42)]);

    let body = body_string(
        handle(
            get_with_cookie("/landlord/billing?ended=1", &cookie),
            &state,
        )
        .unwrap(),
    );
    assert!(body.contains("Subscription canceled."));
}

#[test]
fn portal_redirects_to_the_customer_portal() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie("/landlord/billing/portal", "", &cookie),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(
        location_header(&resp),
        "https://billing.stripe.example/p/session_456"
    );
}

#[test]
fn billing_requires_a_session() {
    let state = test_state(StubApi::default());

    let resp = handle(get("/landlord/billing"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        location_header(&resp),
        "/landlord/login?returnUrl=%2Flandlord%2Fbilling"
    );
}
