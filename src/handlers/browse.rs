use crate::app::AppState;
use crate::domain::listing::ListingCategory;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{current_user, field, nav};
use crate::responses::html_response;
use crate::router::parse_query;
use crate::search::{self, FilterState, SortKey};
use crate::slug::listing_id_from_slug;
use crate::templates::pages::{
    home_page, listing_detail_page, listings_page, DetailVm, HomeVm, ListingsVm,
};
use astra::Request;
use tracing::warn;
use url::form_urlencoded;

pub fn home(state: &AppState, req: &Request) -> ResultResp {
    let user = current_user(state, req);
    let (featured, fetch_error) = match state.api.featured_listings() {
        Ok(listings) => (listings, None),
        Err(err) => {
            warn!("featured feed unavailable: {err}");
            (Vec::new(), Some(err.user_message()))
        }
    };
    let vm = HomeVm {
        featured,
        favorite_ids: state.favorites.ids(),
        fetch_error,
    };
    html_response(home_page(&vm, &nav(state, user.as_ref())))
}

/// One browse page: fetch the category feed, then filter, sort and
/// paginate it locally. `category` of `None` is the combined feed.
pub fn listings(state: &AppState, req: &Request, category: Option<ListingCategory>) -> ResultResp {
    let user = current_user(state, req);
    let pairs = parse_query(req);
    let filters = FilterState::from_pairs(&pairs);
    let sort = field(&pairs, "sort").map(SortKey::parse).unwrap_or_default();
    let page = field(&pairs, "page")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);

    let feed = state.api.listings(category, &filters)?;
    let results = search::run(feed, &filters, sort, page);

    let vm = ListingsVm {
        category,
        page_query: browse_query(&filters, sort),
        filters,
        sort,
        results,
        favorite_ids: state.favorites.ids(),
    };
    html_response(listings_page(&vm, &nav(state, user.as_ref())))
}

pub fn detail(
    state: &AppState,
    req: &Request,
    category: ListingCategory,
    slug: &str,
) -> ResultResp {
    let id = listing_id_from_slug(slug).ok_or(ServerError::NotFound)?;
    let listing = state.api.listing(id)?;
    let user = current_user(state, req);
    let vm = DetailVm {
        is_favorite: state.favorites.is_favorite(id),
        listing,
        category,
    };
    html_response(listing_detail_page(&vm, &nav(state, user.as_ref())))
}

/// The query string pagination links share: active filters plus a
/// non-default sort, without the page number.
fn browse_query(filters: &FilterState, sort: SortKey) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in filters.to_pairs() {
        serializer.append_pair(key, value);
    }
    if sort != SortKey::Default {
        serializer.append_pair("sort", sort.as_str());
    }
    serializer.finish()
}
