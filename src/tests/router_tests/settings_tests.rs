use crate::domain::user::AuthUser;
use crate::router::handle;
use crate::tests::utils::*;
use std::sync::Arc;

#[test]
fn settings_page_shows_the_refreshed_profile() {
    // The API copy of the account is newer than the stored session.
    let state = test_state(StubApi {
        user: Some(AuthUser {
            first_name: Some("Patricia".to_string()),
            contact_number: Some("315-555-0100".to_string()),
            ..landlord()
        }),
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let resp = handle(get_with_cookie("/landlord/settings", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("value=\"Patricia\""));
    assert!(body.contains("value=\"315-555-0100\""));
    // The refresh also lands in the session store.
    assert_eq!(
        state.auth.current().unwrap().first_name.as_deref(),
        Some("Patricia")
    );
}

#[test]
fn settings_page_falls_back_to_the_stored_account() {
    // No profile on the stub: the refresh 404s and the page still renders.
    let state = test_state(StubApi::default());
    let cookie = sign_in(&state, landlord());

    let resp = handle(get_with_cookie("/landlord/settings", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("value=\"Pat\""));
}

#[test]
fn profile_update_saves_and_confirms() {
    let state = test_state(StubApi {
        user: Some(landlord()),
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie(
            "/landlord/settings/profile",
            "first_name=Ana&last_name=Lovelace&username=ana&contact_number=315-555-0199",
            &cookie,
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/landlord/settings?saved=1");

    let stored = state.auth.current().unwrap();
    assert_eq!(stored.first_name.as_deref(), Some("Ana"));
    assert_eq!(stored.username.as_deref(), Some("ana"));

    let body = body_string(
        handle(
            get_with_cookie("/landlord/settings?saved=1", &cookie),
            &state,
        )
        .unwrap(),
    );
    assert!(body.contains("Profile saved."));
}

#[test]
fn password_change_posts_to_the_api() {
    let api = Arc::new(StubApi {
        user: Some(landlord()),
        ..Default::default()
    });
    let state = state_over(api.clone());
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie(
            "/landlord/settings/password",
            "current_password=oldpass99&new_password=newpass99&confirm_password=newpass99",
            &cookie,
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/landlord/settings?password=1");
    assert_eq!(*api.password_changes.lock().unwrap(), vec![42]);

    let body = body_string(
        handle(
            get_with_cookie("/landlord/settings?password=1", &cookie),
            &state,
        )
        .unwrap(),
    );
    assert!(body.contains("Password changed."));
}

#[test]
fn password_change_requires_matching_confirmation() {
    let api = Arc::new(StubApi {
        user: Some(landlord()),
        ..Default::default()
    });
    let state = state_over(api.clone());
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie(
            "/landlord/settings/password",
            "current_password=oldpass99&new_password=newpass99&confirm_password=different",
            &cookie,
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("The new passwords do not match."));
    assert!(api.password_changes.lock().unwrap().is_empty());
}

#[test]
fn password_change_requires_every_field() {
    let state = test_state(StubApi {
        user: Some(landlord()),
        ..Default::default()
    });
    let cookie = sign_in(&state, landlord());

    let resp = handle(
        post_form_with_cookie(
            "/landlord/settings/password",
            "current_password=oldpass99",
            &cookie,
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("All three password fields are required."));
}
