use crate::domain::listing::Listing;
use crate::slug::detail_path;
use crate::templates::components::favorite_button;
use maud::{html, Markup};

/// One tile in a browse grid. Links into the detail page through the
/// listing's slug URL.
pub fn listing_card(listing: &Listing, is_favorite: bool) -> Markup {
    let href = detail_path(listing);
    html! {
        article class="listing-card card" {
            a href=(href) class="card-photo" {
                @if let Some(first) = listing.images.first() {
                    img src=(first) alt=(listing.title) loading="lazy";
                } @else {
                    div class="photo-placeholder" { "No photo yet" }
                }
                @if listing.featured {
                    span class="featured-flag" { "Featured" }
                }
            }
            div class="card-body" {
                div class="card-title-row" {
                    a href=(href) class="card-title" { h3 { (listing.title) } }
                    (favorite_button(listing.id, is_favorite))
                }
                p class="card-price" { (listing.price) }
                p class="card-address" { (listing.address) ", " (listing.city) }
                p class="card-meta" {
                    @if listing.beds == 0 { "Studio" } @else { (listing.beds) " bed" }
                    " / " (listing.baths) " bath"
                    @if let Some(date) = &listing.available_date {
                        span class="card-available" { "Available " (date) }
                    }
                }
            }
        }
    }
}
