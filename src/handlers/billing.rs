use crate::app::AppState;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::landlord::own_listings;
use crate::handlers::{current_user, field, nav, redirect_to_login};
use crate::responses::{html_response, see_other};
use crate::router::{form_fields, parse_query};
use crate::templates::pages::{billing_page, BillingRow, BillingVm};
use astra::Request;
use tracing::{info, warn};

pub fn overview(state: &AppState, req: &Request) -> ResultResp {
    let Some(user) = current_user(state, req) else {
        return redirect_to_login("/landlord/billing");
    };

    let mut rows = Vec::new();
    for listing in own_listings(state, &user)? {
        let details = match state.api.subscription_details(listing.id, user.id) {
            Ok(details) => Some(details),
            Err(err) => {
                warn!(listing_id = listing.id, "subscription lookup failed: {err}");
                None
            }
        };
        rows.push(BillingRow { listing, details });
    }

    let pairs = parse_query(req);
    let vm = BillingVm {
        rows,
        notice: billing_notice(&pairs),
        error: None,
    };
    html_response(billing_page(&vm, &nav(state, Some(&user))))
}

/// Starts a Stripe checkout for one listing and sends the landlord to
/// the payment page.
pub fn checkout(state: &AppState, mut req: Request) -> ResultResp {
    let Some(user) = current_user(state, &req) else {
        return redirect_to_login("/landlord/billing");
    };
    let fields = form_fields(&mut req)?;
    let listing_id = required_listing_id(&fields)?;
    let url = state.api.checkout_session(user.id, listing_id)?;
    info!(listing_id, "checkout session created");
    see_other(&url)
}

pub fn cancel(state: &AppState, mut req: Request) -> ResultResp {
    let Some(user) = current_user(state, &req) else {
        return redirect_to_login("/landlord/billing");
    };
    let fields = form_fields(&mut req)?;
    let listing_id = required_listing_id(&fields)?;
    state.api.cancel_subscription(listing_id, user.id)?;
    info!(listing_id, "subscription canceled");
    see_other("/landlord/billing?ended=1")
}

pub fn portal(state: &AppState, req: &Request) -> ResultResp {
    let Some(user) = current_user(state, req) else {
        return redirect_to_login("/landlord/billing");
    };
    let url = state.api.portal_session(user.id)?;
    see_other(&url)
}

fn required_listing_id(fields: &[(String, String)]) -> Result<u64, ServerError> {
    field(fields, "listing_id")
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| ServerError::BadRequest("a listing id is required".to_string()))
}

fn billing_notice(pairs: &[(String, String)]) -> Option<String> {
    field(pairs, "ended").map(|_| {
        "Subscription canceled. The listing stays visible until the period ends.".to_string()
    })
}
