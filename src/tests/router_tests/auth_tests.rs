use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn login_sets_a_session_and_redirects() {
    let state = test_state(StubApi {
        user: Some(landlord()),
        ..Default::default()
    });

    let resp = handle(
        post_form("/landlord/login", "email=owner%40example.com&password=hunter22"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/landlord/dashboard");
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(state.auth.current().is_some());
}

#[test]
fn login_honors_a_local_return_url() {
    let state = test_state(StubApi {
        user: Some(landlord()),
        ..Default::default()
    });

    let resp = handle(
        post_form(
            "/landlord/login",
            "email=owner%40example.com&password=hunter22&returnUrl=%2Flandlord%2Fbilling",
        ),
        &state,
    )
    .unwrap();
    assert_eq!(location_header(&resp), "/landlord/billing");
}

#[test]
fn login_ignores_offsite_return_urls() {
    let state = test_state(StubApi {
        user: Some(landlord()),
        ..Default::default()
    });

    let resp = handle(
        post_form(
            "/landlord/login",
            "email=owner%40example.com&password=hunter22&returnUrl=https%3A%2F%2Fevil.example",
        ),
        &state,
    )
    .unwrap();
    assert_eq!(location_header(&resp), "/landlord/dashboard");
}

#[test]
fn bad_credentials_re_render_the_form() {
    let state = test_state(StubApi {
        auth_error: Some(ServerError::Unauthorized(
            "Invalid email or password".to_string(),
        )),
        ..Default::default()
    });

    let resp = handle(
        post_form("/landlord/login", "email=owner%40example.com&password=wrong"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Invalid email or password"));
    // The email survives the round trip so only the password needs retyping.
    assert!(body.contains("value=\"owner@example.com\""));
    assert!(state.auth.current().is_none());
}

#[test]
fn missing_credentials_never_reach_the_api() {
    let state = test_state(StubApi {
        user: Some(landlord()),
        ..Default::default()
    });

    let resp = handle(
        post_form("/landlord/login", "email=owner%40example.com"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Email and password are both required."));
    assert!(state.auth.current().is_none());
}

#[test]
fn login_page_redirects_when_already_signed_in() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let resp = handle(get_with_cookie("/landlord/login", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/landlord/dashboard");
}

#[test]
fn signup_creates_an_account_and_signs_in() {
    let state = test_state(StubApi::default());

    let resp = handle(
        post_form(
            "/landlord/signup",
            "email=new%40example.com&password=longenough&first_name=Ana",
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/landlord/dashboard");
    assert_eq!(state.auth.current().unwrap().email, "new@example.com");
}

#[test]
fn logout_clears_the_session_and_cookie() {
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie("/landlord/logout", "", &cookie),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/");
    let set_cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(set_cookie.contains("Max-Age=0"));
    assert!(state.auth.current().is_none());
}

#[test]
fn protected_pages_bounce_to_login_with_a_return_url() {
    let state = test_state(StubApi::default());

    let resp = handle(get("/landlord/dashboard"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        location_header(&resp),
        "/landlord/login?returnUrl=%2Flandlord%2Fdashboard"
    );
}

#[test]
fn a_forged_cookie_is_anonymous() {
    let state = test_state(StubApi::default());
    sign_in(&state, landlord());

    let resp = handle(
        get_with_cookie("/landlord/dashboard", "session=forged-token"),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert!(location_header(&resp).starts_with("/landlord/login"));
}
