use crate::router::handle;
use crate::tests::utils::*;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::sync::Arc;
use url::form_urlencoded;

#[test]
fn dashboard_lists_only_the_landlords_listings() {
    let mut other = sample_listing(9, "Someone else's loft");
    other.contact_email = Some("other@example.com".to_string());

    let state = test_state(StubApi {
        listings: vec![sample_listing(7, "3 Bed on Euclid"), other],
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let resp = handle(get_with_cookie("/landlord/dashboard", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("3 Bed on Euclid"));
    assert!(!body.contains("Someone else's loft"));
    assert!(body.contains("Post a listing"));
}

#[test]
fn dashboard_matches_contact_email_case_insensitively() {
    let mut listing = sample_listing(7, "3 Bed on Euclid");
    listing.contact_email = Some("Owner@Example.COM".to_string());

    let state = test_state(StubApi {
        listings: vec![listing],
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let body = body_string(handle(get_with_cookie("/landlord/dashboard", &cookie), &state).unwrap());
    assert!(body.contains("3 Bed on Euclid"));
}

#[test]
fn dashboard_reports_the_checkout_outcome() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let paid = body_string(
        handle(
            get_with_cookie(
                "/landlord/dashboard?success=true&session_id=cs_test_123",
                &cookie,
            ),
            &state,
        )
        .unwrap(),
    );
    assert!(paid.contains("Payment complete."));

    let abandoned = body_string(
        handle(
            get_with_cookie("/landlord/dashboard?canceled=true", &cookie),
            &state,
        )
        .unwrap(),
    );
    assert!(abandoned.contains("Checkout was canceled."));
}

#[test]
fn create_listing_submits_a_draft_and_redirects() {
    let api = Arc::new(StubApi::default());
    let state = state_over(api.clone());
    let cookie = sign_in(&state, landlord());

    let form = "address=210+Ackerman+Ave&zip=13210&beds=3&baths=1.5&rent=1650\
                &pets=Cats+Allowed&details=Porch+and+yard&date_avail=06%2F01%2F2026";
    let resp = handle(
        post_form_with_cookie("/landlord/listings/new", form, &cookie),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/landlord/dashboard");

    let created = api.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].user_id, 42);
    assert_eq!(created[0].address, "210 Ackerman Ave");
    assert_eq!(created[0].rent, Some(1650));
    assert_eq!(created[0].baths.as_deref(), Some("1.5"));
    assert_eq!(created[0].date_avail.as_deref(), Some("06/01/2026"));
}

#[test]
fn create_listing_requires_an_address() {
    let api = Arc::new(StubApi::default());
    let state = state_over(api.clone());
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie("/landlord/listings/new", "rent=1650", &cookie),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("A street address is required."));
    assert!(api.created.lock().unwrap().is_empty());
}

#[test]
fn edit_form_prefills_the_current_listing() {
    let mut listing = sample_listing(7, "3 Bed on Euclid");
    listing.details = Some("Hardwood floors throughout.".to_string());

    let state = test_state(StubApi {
        listings: vec![listing],
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        get_with_cookie("/landlord/listings/7/edit", &cookie),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("value=\"713 Euclid Ave\""));
    assert!(body.contains("Hardwood floors throughout."));
}

#[test]
fn update_listing_records_the_changes() {
    let api = Arc::new(StubApi {
        listings: vec![sample_listing(7, "3 Bed on Euclid")],
        ..Default::default()
    });
    let state = state_over(api.clone());
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie(
            "/landlord/listings/7/edit",
            "address=713+Euclid+Ave&rent=1300",
            &cookie,
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let updated = api.updated.lock().unwrap();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, 7);
    assert_eq!(updated[0].1.rent, Some(1300));
}

#[test]
fn map_preview_fragment_embeds_the_typed_address() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        get_with_cookie("/landlord/map-preview?address=713+Euclid+Ave", &cookie),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("maps.google.com/maps?q=713+Euclid+Ave"));
    assert!(body.contains("output=embed"));
}

#[test]
fn map_preview_without_an_address_hints() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let body = body_string(
        handle(get_with_cookie("/landlord/map-preview", &cookie), &state).unwrap(),
    );
    assert!(body.contains("Start typing an address"));
}

fn png_data_url(width: u32, height: u32) -> String {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 60, 20, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    format!("data:image/png;base64,{}", BASE64.encode(&bytes))
}

fn crop_form(image: &str, rect: [&str; 4], rotate: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("image", image)
        .append_pair("x", rect[0])
        .append_pair("y", rect[1])
        .append_pair("width", rect[2])
        .append_pair("height", rect[3])
        .append_pair("rotate", rotate)
        .finish()
}

#[test]
fn crop_returns_an_edited_jpeg_fragment() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let form = crop_form(&png_data_url(8, 8), ["1", "1", "4", "4"], "90");
    let resp = handle(
        post_form_with_cookie("/landlord/photos/crop", &form, &cookie),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("data:image/jpeg;base64,"));
    assert!(body.contains("4 x 4 px"));
}

#[test]
fn crop_without_a_photo_explains() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie("/landlord/photos/crop", "width=4&height=4", &cookie),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Choose a photo first."));
}

#[test]
fn crop_rejects_an_empty_window() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let form = crop_form(&png_data_url(8, 8), ["0", "0", "0", "4"], "0");
    let resp = handle(
        post_form_with_cookie("/landlord/photos/crop", &form, &cookie),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("crop area must not be empty"));
}

#[test]
fn photo_routes_require_login() {
    let state = test_state(StubApi::default());

    let resp = handle(post_form("/landlord/photos/crop", ""), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert!(location_header(&resp).starts_with("/landlord/login"));
}
