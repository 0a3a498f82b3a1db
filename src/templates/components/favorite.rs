use maud::{html, Markup};

/// Heart toggle shown on cards and detail pages. Posting swaps the
/// button in place with the fragment the toggle route sends back.
pub fn favorite_button(listing_id: u64, is_favorite: bool) -> Markup {
    html! {
        button
            type="button"
            class=(if is_favorite { "favorite-toggle active" } else { "favorite-toggle" })
            hx-post="/favorites/toggle"
            hx-vals=(format!(r#"{{"id": {listing_id}}}"#))
            hx-swap="outerHTML"
            aria-pressed=(is_favorite)
        {
            @if is_favorite { "\u{2665} Saved" } @else { "\u{2661} Save" }
        }
    }
}
