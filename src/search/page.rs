/// Listings shown per browse page.
pub const PAGE_SIZE: usize = 24;

/// Neighboring pages shown on each side of the current one.
const WINDOW: usize = 2;

/// Number of pages needed for `total` items. An empty result still
/// reports one page so the current page stays meaningful.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Clamps a requested 1-based page into `1..=count`.
pub fn clamp_page(requested: usize, count: usize) -> usize {
    requested.clamp(1, count.max(1))
}

/// The slice of `items` shown on a clamped 1-based page.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = (page - 1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// One entry in the collapsed page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// Collapses `1..=count` down to the first page, the last page, and a
/// window around the current one. A single elided page is shown
/// instead of a gap marker; longer elisions become one `Gap`.
pub fn page_links(current: usize, count: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    let mut last_shown = 0usize;
    for page in 1..=count {
        let shown = page == 1 || page == count || page.abs_diff(current) <= WINDOW;
        if !shown {
            continue;
        }
        if page == last_shown + 2 {
            links.push(PageLink::Page(page - 1));
        } else if page > last_shown + 2 {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(page));
        last_shown = page;
    }
    links
}
