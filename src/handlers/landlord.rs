use crate::app::AppState;
use crate::domain::draft::ListingDraft;
use crate::domain::listing::{Listing, ListingCategory};
use crate::domain::user::AuthUser;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{current_user, field, nav, redirect_to_login};
use crate::imaging::{self, CropRect, Flip};
use crate::responses::{html_response, see_other};
use crate::router::{form_fields, parse_query};
use crate::search::FilterState;
use crate::templates::components::{crop_failed, crop_result, map_preview};
use crate::templates::pages::{dashboard_page, listing_form_page, DashboardVm, ListingFormVm};
use astra::Request;
use tracing::info;

pub fn dashboard(state: &AppState, req: &Request) -> ResultResp {
    let Some(user) = current_user(state, req) else {
        return redirect_to_login("/landlord/dashboard");
    };
    let listings = own_listings(state, &user)?;
    let vm = DashboardVm {
        listings,
        user: user.clone(),
        notice: checkout_notice(&parse_query(req)),
    };
    html_response(dashboard_page(&vm, &nav(state, Some(&user))))
}

/// Stripe checkout returns to the dashboard with a query flag.
fn checkout_notice(pairs: &[(String, String)]) -> Option<String> {
    if field(pairs, "success").is_some() {
        return Some("Payment complete. Your listing subscription is active.".to_string());
    }
    if field(pairs, "canceled").is_some() {
        return Some("Checkout was canceled. The listing is not active yet.".to_string());
    }
    None
}

pub fn new_listing_form(state: &AppState, req: &Request) -> ResultResp {
    let Some(user) = current_user(state, req) else {
        return redirect_to_login("/landlord/listings/new");
    };
    let vm = ListingFormVm::create(user.id);
    html_response(listing_form_page(&vm, &nav(state, Some(&user))))
}

pub fn create_listing(state: &AppState, mut req: Request) -> ResultResp {
    let Some(user) = current_user(state, &req) else {
        return redirect_to_login("/landlord/listings/new");
    };
    let fields = form_fields(&mut req)?;
    let draft = ListingDraft::from_form(user.id, &fields);
    if draft.address.is_empty() {
        let vm = form_with_error(
            ListingFormVm::create(user.id),
            draft,
            "A street address is required.".to_string(),
        );
        return html_response(listing_form_page(&vm, &nav(state, Some(&user))));
    }

    match state.api.create_listing(&draft) {
        Ok(()) => {
            info!(user_id = user.id, "listing submitted for review");
            see_other("/landlord/dashboard")
        }
        Err(err) if is_form_error(&err) => {
            let vm = form_with_error(ListingFormVm::create(user.id), draft, err.user_message());
            html_response(listing_form_page(&vm, &nav(state, Some(&user))))
        }
        Err(err) => Err(err),
    }
}

pub fn edit_listing_form(state: &AppState, req: &Request, id: u64) -> ResultResp {
    let Some(user) = current_user(state, req) else {
        return redirect_to_login(&format!("/landlord/listings/{id}/edit"));
    };
    let listing = state.api.listing_for_edit(id, user.id)?;
    let vm = ListingFormVm::edit(id, ListingDraft::from_listing(user.id, &listing));
    html_response(listing_form_page(&vm, &nav(state, Some(&user))))
}

pub fn update_listing(state: &AppState, mut req: Request, id: u64) -> ResultResp {
    let Some(user) = current_user(state, &req) else {
        return redirect_to_login(&format!("/landlord/listings/{id}/edit"));
    };
    let fields = form_fields(&mut req)?;
    let draft = ListingDraft::from_form(user.id, &fields);
    if draft.address.is_empty() {
        let vm = form_with_error(
            ListingFormVm::edit(id, draft.clone()),
            draft,
            "A street address is required.".to_string(),
        );
        return html_response(listing_form_page(&vm, &nav(state, Some(&user))));
    }

    match state.api.update_listing(id, &draft) {
        Ok(()) => see_other("/landlord/dashboard"),
        Err(err) if is_form_error(&err) => {
            let vm = form_with_error(ListingFormVm::edit(id, draft.clone()), draft, err.user_message());
            html_response(listing_form_page(&vm, &nav(state, Some(&user))))
        }
        Err(err) => Err(err),
    }
}

/// htmx fragment behind the address field on the listing form.
pub fn map_preview_fragment(state: &AppState, req: &Request) -> ResultResp {
    if current_user(state, req).is_none() {
        return redirect_to_login("/landlord/listings/new");
    }
    let pairs = parse_query(req);
    html_response(map_preview(field(&pairs, "address").unwrap_or("")))
}

/// Photo editor submit: decode, rotate, flip, crop, and hand back the
/// result fragment. Bad input swaps in an inline message instead of a
/// full error page.
pub fn crop_photo(state: &AppState, mut req: Request) -> ResultResp {
    if current_user(state, &req).is_none() {
        return redirect_to_login("/landlord/listings/new");
    }
    let fields = form_fields(&mut req)?;
    let Some(image) = field(&fields, "image") else {
        return html_response(crop_failed("Choose a photo first."));
    };
    let crop = CropRect {
        x: number(&fields, "x"),
        y: number(&fields, "y"),
        width: number(&fields, "width"),
        height: number(&fields, "height"),
    };
    let degrees = field(&fields, "rotate")
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);
    let flip = Flip {
        horizontal: field(&fields, "flip_h").is_some(),
        vertical: field(&fields, "flip_v").is_some(),
    };

    match imaging::crop_data_url(image, crop, degrees, flip) {
        Ok(data_url) => html_response(crop_result(&data_url, crop.width, crop.height)),
        Err(ServerError::BadRequest(message)) => html_response(crop_failed(&message)),
        Err(err) => Err(err),
    }
}

/// The landlord's listings, matched by contact email across every
/// category feed. Only approved listings show up in the feeds, so a
/// fresh submission stays off this list until it clears review.
pub(crate) fn own_listings(
    state: &AppState,
    user: &AuthUser,
) -> Result<Vec<Listing>, ServerError> {
    let filters = FilterState::default();
    let mut mine = Vec::new();
    for category in ListingCategory::ALL {
        let feed = state.api.listings(Some(category), &filters)?;
        mine.extend(feed.into_iter().filter(|listing| {
            listing
                .contact_email
                .as_deref()
                .is_some_and(|email| email.eq_ignore_ascii_case(&user.email))
        }));
    }
    mine.sort_by_key(|listing| listing.id);
    mine.dedup_by_key(|listing| listing.id);
    Ok(mine)
}

fn form_with_error(mut vm: ListingFormVm, draft: ListingDraft, message: String) -> ListingFormVm {
    vm.draft = draft;
    vm.error = Some(message);
    vm
}

fn number(fields: &[(String, String)], name: &str) -> u32 {
    field(fields, name)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0)
}

fn is_form_error(err: &ServerError) -> bool {
    matches!(
        err,
        ServerError::BadRequest(_) | ServerError::Upstream { .. }
    )
}
