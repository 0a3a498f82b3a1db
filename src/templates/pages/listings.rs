use crate::domain::listing::ListingCategory;
use crate::search::{FilterState, ResultsPage, SortKey};
use crate::templates::components::{listing_card, pagination, search_widget};
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};
use std::collections::HashSet;

pub struct ListingsVm {
    /// `None` renders the combined feed across every category.
    pub category: Option<ListingCategory>,
    pub filters: FilterState,
    pub sort: SortKey,
    pub results: ResultsPage,
    pub favorite_ids: HashSet<u64>,
    /// Query string every pagination link keeps, without the page
    /// parameter.
    pub page_query: String,
}

impl ListingsVm {
    fn base_path(&self) -> String {
        match self.category {
            Some(category) => format!("/{}", category.route_prefix()),
            None => "/listings".to_string(),
        }
    }

    fn heading(&self) -> &'static str {
        match self.category {
            Some(category) => category.label(),
            None => "All listings",
        }
    }
}

pub fn listings_page(vm: &ListingsVm, nav: &NavVm) -> Markup {
    let base_path = vm.base_path();
    let title = format!("{} in Syracuse, NY", vm.heading());
    desktop_layout(
        &title,
        nav,
        html! {
            main class="container" {
                h1 { (vm.heading()) }
                p class="result-count" {
                    @if vm.results.total == 1 {
                        "1 place"
                    } @else {
                        (vm.results.total) " places"
                    }
                }

                (search_widget(&base_path, &vm.filters, vm.sort))

                @if vm.results.items.is_empty() {
                    div class="empty-state card" {
                        p { "No listings match your filters." }
                        a href=(base_path) { "Clear filters" }
                    }
                } @else {
                    div class="listing-grid" {
                        @for listing in &vm.results.items {
                            (listing_card(listing, vm.favorite_ids.contains(&listing.id)))
                        }
                    }
                }

                (pagination(&base_path, &vm.page_query, vm.results.page, vm.results.page_count))
            }
        },
    )
}
