use crate::app::AppState;
use crate::domain::user::AuthUser;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{current_user, field, nav, redirect_to_login};
use crate::responses::{html_response, see_other};
use crate::router::parse_query;
use crate::templates::pages::{admin_page, AdminVm};
use astra::Request;
use tracing::info;

/// Admin pages bounce anonymous visitors to login; a signed-in
/// non-admin gets a 403.
fn gate(state: &AppState, req: &Request) -> Result<Option<AuthUser>, ServerError> {
    let Some(user) = current_user(state, req) else {
        return Ok(None);
    };
    if user.is_admin() {
        Ok(Some(user))
    } else {
        Err(ServerError::Forbidden(
            "Administrator access is required.".to_string(),
        ))
    }
}

pub fn review_queue(state: &AppState, req: &Request) -> ResultResp {
    let Some(user) = gate(state, req)? else {
        return redirect_to_login("/admin");
    };
    let pending = state.api.pending_listings()?;
    let vm = AdminVm {
        pending,
        notice: review_notice(&parse_query(req)),
    };
    html_response(admin_page(&vm, &nav(state, Some(&user))))
}

pub fn approve(state: &AppState, req: &Request, id: u64) -> ResultResp {
    let Some(_user) = gate(state, req)? else {
        return redirect_to_login("/admin");
    };
    state.api.approve_listing(id)?;
    info!(listing_id = id, "listing approved");
    see_other("/admin?approved=1")
}

pub fn reject(state: &AppState, req: &Request, id: u64) -> ResultResp {
    let Some(_user) = gate(state, req)? else {
        return redirect_to_login("/admin");
    };
    state.api.reject_listing(id)?;
    info!(listing_id = id, "listing rejected");
    see_other("/admin?rejected=1")
}

fn review_notice(pairs: &[(String, String)]) -> Option<String> {
    if field(pairs, "approved").is_some() {
        return Some("Listing approved. It is now live.".to_string());
    }
    if field(pairs, "rejected").is_some() {
        return Some("Listing rejected.".to_string());
    }
    None
}
