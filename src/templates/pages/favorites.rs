use crate::domain::listing::Listing;
use crate::templates::components::listing_card;
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct FavoritesVm {
    pub items: Vec<Listing>,
}

pub fn favorites_page(vm: &FavoritesVm, nav: &NavVm) -> Markup {
    desktop_layout(
        "Favorites",
        nav,
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Favorites" }
                    @if !vm.items.is_empty() {
                        form action="/favorites/clear" method="post" {
                            button type="submit" class="btn-reset" { "Clear all" }
                        }
                    }
                }

                @if vm.items.is_empty() {
                    div class="empty-state card" {
                        p { "You haven't saved any listings yet." }
                        a href="/rentals" { "Browse rentals" }
                    }
                } @else {
                    div class="listing-grid" {
                        @for listing in &vm.items {
                            (listing_card(listing, true))
                        }
                    }
                }
            }
        },
    )
}
