use crate::domain::listing::{Listing, ListingCategory};
use crate::search::{FilterState, SortKey};
use crate::templates::components::{error_notice, listing_card, search_widget};
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};
use std::collections::HashSet;

pub struct HomeVm {
    pub featured: Vec<Listing>,
    pub favorite_ids: HashSet<u64>,
    /// Set when the featured feed could not be fetched. The page still
    /// renders, it is the front door.
    pub fetch_error: Option<String>,
}

pub fn home_page(vm: &HomeVm, nav: &NavVm) -> Markup {
    desktop_layout(
        "Find Apartments, Homes & Rooms for Rent in Syracuse, NY",
        nav,
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Find your next place in Syracuse, NY" }
                    p class="lead" {
                        "Browse family homes, student apartments and shared spaces from local landlords."
                    }
                    (search_widget("/rentals", &FilterState::default(), SortKey::Default))
                }

                section class="category-tiles" {
                    @for category in ListingCategory::ALL {
                        a href=(format!("/{}", category.route_prefix())) class="category-tile card" {
                            h3 { (category.label()) }
                            p { (category_blurb(category)) }
                        }
                    }
                }

                section class="featured" {
                    h2 { "Featured Syracuse Apartments & Homes" }
                    @if let Some(message) = &vm.fetch_error {
                        (error_notice(message))
                    } @else if vm.featured.is_empty() {
                        p class="empty-state" { "No featured listings right now. Check back soon." }
                    } @else {
                        div class="listing-grid" {
                            @for listing in &vm.featured {
                                (listing_card(listing, vm.favorite_ids.contains(&listing.id)))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn category_blurb(category: ListingCategory) -> &'static str {
    match category {
        ListingCategory::Rentals => "Leases of ten months and up",
        ListingCategory::ShortTerm => "Nine months or less",
        ListingCategory::Sublets => "Take over a tenant's lease",
        ListingCategory::Rooms => "A room with shared common areas",
    }
}
