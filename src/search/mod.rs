pub mod filters;
pub mod page;
pub mod sort;

pub use filters::FilterState;
pub use page::{page_links, PageLink, PAGE_SIZE};
pub use sort::SortKey;

use crate::domain::listing::Listing;

/// What a browse page renders: one page of listings plus the totals
/// the pagination strip needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage {
    pub items: Vec<Listing>,
    /// Matches across all pages, after filtering.
    pub total: usize,
    /// The clamped 1-based page actually shown.
    pub page: usize,
    pub page_count: usize,
}

/// Filter, sort, then slice one page out of a fetched feed. Runs in
/// this order so the page numbers always refer to the filtered,
/// sorted listing sequence.
pub fn run(
    listings: Vec<Listing>,
    filters: &FilterState,
    sort: SortKey,
    requested_page: usize,
) -> ResultsPage {
    let mut matched: Vec<Listing> = listings
        .into_iter()
        .filter(|listing| filters.matches(listing))
        .collect();
    sort.apply(&mut matched);

    let total = matched.len();
    let page_count = page::page_count(total);
    let current = page::clamp_page(requested_page, page_count);
    let items = page::page_slice(&matched, current).to_vec();

    ResultsPage {
        items,
        total,
        page: current,
        page_count,
    }
}
