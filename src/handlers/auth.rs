use crate::app::AppState;
use crate::domain::user::SignupRequest;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{current_user, field, nav, safe_return_url};
use crate::responses::redirect::{clear_session_cookie, session_cookie};
use crate::responses::{html_response, see_other, see_other_with_cookie};
use crate::router::{form_fields, parse_query};
use crate::templates::pages::{login_page, LoginVm};
use astra::Request;
use tracing::info;

const AFTER_LOGIN: &str = "/landlord/dashboard";

pub fn login_form(state: &AppState, req: &Request) -> ResultResp {
    let pairs = parse_query(req);
    let return_url = safe_return_url(field(&pairs, "returnUrl"));
    if current_user(state, req).is_some() {
        return see_other(return_url.as_deref().unwrap_or(AFTER_LOGIN));
    }
    let vm = LoginVm {
        return_url,
        ..Default::default()
    };
    html_response(login_page(&vm, &nav(state, None)))
}

pub fn login(state: &AppState, mut req: Request) -> ResultResp {
    let fields = form_fields(&mut req)?;
    let return_url = safe_return_url(field(&fields, "returnUrl"));
    let (Some(email), Some(password)) = (field(&fields, "email"), field(&fields, "password"))
    else {
        let vm = LoginVm {
            login_error: Some("Email and password are both required.".to_string()),
            email: field(&fields, "email").map(str::to_string),
            return_url,
            ..Default::default()
        };
        return html_response(login_page(&vm, &nav(state, None)));
    };

    match state.api.login(email, password) {
        Ok(user) => {
            info!(user_id = user.id, "signed in");
            let token = state.auth.sign_in(user)?;
            see_other_with_cookie(
                return_url.as_deref().unwrap_or(AFTER_LOGIN),
                &session_cookie(&token),
            )
        }
        Err(err) if is_form_error(&err) => {
            let vm = LoginVm {
                login_error: Some(err.user_message()),
                email: Some(email.to_string()),
                return_url,
                ..Default::default()
            };
            html_response(login_page(&vm, &nav(state, None)))
        }
        Err(err) => Err(err),
    }
}

pub fn signup(state: &AppState, mut req: Request) -> ResultResp {
    let fields = form_fields(&mut req)?;
    let return_url = safe_return_url(field(&fields, "returnUrl"));
    let (Some(email), Some(password)) = (field(&fields, "email"), field(&fields, "password"))
    else {
        let vm = LoginVm {
            signup_error: Some("Email and password are both required.".to_string()),
            return_url,
            ..Default::default()
        };
        return html_response(login_page(&vm, &nav(state, None)));
    };

    let request = SignupRequest {
        email: email.to_string(),
        password: password.to_string(),
        first_name: field(&fields, "first_name").map(str::to_string),
        last_name: field(&fields, "last_name").map(str::to_string),
        contact_number: field(&fields, "contact_number").map(str::to_string),
    };

    match state.api.signup(&request) {
        Ok(user) => {
            info!(user_id = user.id, "account created");
            let token = state.auth.sign_in(user)?;
            see_other_with_cookie(
                return_url.as_deref().unwrap_or(AFTER_LOGIN),
                &session_cookie(&token),
            )
        }
        Err(err) if is_form_error(&err) => {
            let vm = LoginVm {
                signup_error: Some(err.user_message()),
                email: Some(email.to_string()),
                return_url,
                ..Default::default()
            };
            html_response(login_page(&vm, &nav(state, None)))
        }
        Err(err) => Err(err),
    }
}

pub fn logout(state: &AppState) -> ResultResp {
    state.auth.sign_out()?;
    see_other_with_cookie("/", &clear_session_cookie())
}

/// Upstream rejections re-render the form with a message instead of
/// becoming an error page.
fn is_form_error(err: &ServerError) -> bool {
    matches!(
        err,
        ServerError::Unauthorized(_)
            | ServerError::Forbidden(_)
            | ServerError::BadRequest(_)
            | ServerError::Upstream { .. }
    )
}
