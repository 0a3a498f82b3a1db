use crate::app::AppState;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{current_user, field, nav, redirect_to_login};
use crate::responses::{html_response, see_other};
use crate::router::{form_fields, parse_query};
use crate::templates::pages::{settings_page, SettingsVm};
use astra::Request;
use tracing::warn;

pub fn show(state: &AppState, req: &Request) -> ResultResp {
    let Some(user) = current_user(state, req) else {
        return redirect_to_login("/landlord/settings");
    };

    // Refresh from the API so edits made elsewhere show up; fall back
    // to the stored snapshot when the fetch fails.
    let user = match state.api.profile(user.id) {
        Ok(fresh) => {
            state.auth.update(fresh.clone())?;
            fresh
        }
        Err(err) => {
            warn!("profile refresh failed: {err}");
            user
        }
    };

    let pairs = parse_query(req);
    let vm = SettingsVm {
        profile_saved: field(&pairs, "saved").is_some(),
        password_changed: field(&pairs, "password").is_some(),
        user: user.clone(),
        ..Default::default()
    };
    html_response(settings_page(&vm, &nav(state, Some(&user))))
}

pub fn update_profile(state: &AppState, mut req: Request) -> ResultResp {
    let Some(user) = current_user(state, &req) else {
        return redirect_to_login("/landlord/settings");
    };
    let fields = form_fields(&mut req)?;

    let mut updated = user.clone();
    updated.first_name = field(&fields, "first_name").map(str::to_string);
    updated.last_name = field(&fields, "last_name").map(str::to_string);
    updated.username = field(&fields, "username").map(str::to_string);
    updated.contact_number = field(&fields, "contact_number").map(str::to_string);
    updated.company = field(&fields, "company").map(str::to_string);

    match state.api.update_profile(&updated) {
        Ok(saved) => {
            state.auth.update(saved)?;
            see_other("/landlord/settings?saved=1")
        }
        Err(err) if is_form_error(&err) => {
            let vm = SettingsVm {
                user: updated,
                profile_error: Some(err.user_message()),
                ..Default::default()
            };
            html_response(settings_page(&vm, &nav(state, Some(&user))))
        }
        Err(err) => Err(err),
    }
}

pub fn change_password(state: &AppState, mut req: Request) -> ResultResp {
    let Some(user) = current_user(state, &req) else {
        return redirect_to_login("/landlord/settings");
    };
    let fields = form_fields(&mut req)?;

    let current = field(&fields, "current_password");
    let new = field(&fields, "new_password");
    let confirm = field(&fields, "confirm_password");
    let error = match (current, new, confirm) {
        (Some(_), Some(new), Some(confirm)) if new != confirm => {
            Some("The new passwords do not match.".to_string())
        }
        (None, _, _) | (_, None, _) | (_, _, None) => {
            Some("All three password fields are required.".to_string())
        }
        _ => None,
    };
    if let Some(message) = error {
        let vm = SettingsVm {
            user: user.clone(),
            password_error: Some(message),
            ..Default::default()
        };
        return html_response(settings_page(&vm, &nav(state, Some(&user))));
    }

    // The match above guarantees both are present.
    let (Some(current), Some(new)) = (current, new) else {
        return Err(ServerError::InternalError);
    };
    match state.api.change_password(user.id, current, new) {
        Ok(()) => see_other("/landlord/settings?password=1"),
        Err(err) if is_form_error(&err) => {
            let vm = SettingsVm {
                user: user.clone(),
                password_error: Some(err.user_message()),
                ..Default::default()
            };
            html_response(settings_page(&vm, &nav(state, Some(&user))))
        }
        Err(err) => Err(err),
    }
}

fn is_form_error(err: &ServerError) -> bool {
    matches!(
        err,
        ServerError::BadRequest(_)
            | ServerError::Unauthorized(_)
            | ServerError::Forbidden(_)
            | ServerError::Upstream { .. }
    )
}
