use crate::app::AppState;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{current_user, field, nav};
use crate::responses::{html_response, see_other};
use crate::router::form_fields;
use crate::templates::components::favorite_button;
use crate::templates::pages::{favorites_page, FavoritesVm};
use astra::Request;

pub fn index(state: &AppState, req: &Request) -> ResultResp {
    let user = current_user(state, req);
    let vm = FavoritesVm {
        items: state.favorites.all(),
    };
    html_response(favorites_page(&vm, &nav(state, user.as_ref())))
}

/// Flip one listing's saved state and hand back the swapped-in heart.
/// Adding fetches the listing first so the favorites page can render
/// offline from its stored snapshots.
pub fn toggle(state: &AppState, mut req: Request) -> ResultResp {
    let fields = form_fields(&mut req)?;
    let id: u64 = field(&fields, "id")
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| ServerError::BadRequest("a listing id is required".to_string()))?;

    let now_favorite = if state.favorites.is_favorite(id) {
        state.favorites.remove(id)?;
        false
    } else {
        let listing = state.api.listing(id)?;
        state.favorites.add(listing)?;
        true
    };
    html_response(favorite_button(id, now_favorite))
}

pub fn clear(state: &AppState) -> ResultResp {
    state.favorites.clear()?;
    see_other("/favorites")
}
