use crate::search::{page_links, PageLink};
use maud::{html, Markup};

/// Numbered pager under a results grid. `base_query` is the query
/// string shared by every page link, without any page parameter.
pub fn pagination(base_path: &str, base_query: &str, current: usize, count: usize) -> Markup {
    if count <= 1 {
        return html! {};
    }
    let href = |page: usize| page_href(base_path, base_query, page);
    html! {
        nav class="pagination" aria-label="Pages" {
            @if current > 1 {
                a href=(href(current - 1)) class="page-link" { "Previous" }
            }
            @for link in page_links(current, count) {
                @match link {
                    PageLink::Page(page) => {
                        @if page == current {
                            span class="page-link current" aria-current="page" { (page) }
                        } @else {
                            a href=(href(page)) class="page-link" { (page) }
                        }
                    }
                    PageLink::Gap => {
                        span class="page-gap" { "..." }
                    }
                }
            }
            @if current < count {
                a href=(href(current + 1)) class="page-link" { "Next" }
            }
        }
    }
}

fn page_href(base_path: &str, base_query: &str, page: usize) -> String {
    if base_query.is_empty() {
        format!("{base_path}?page={page}")
    } else {
        format!("{base_path}?{base_query}&page={page}")
    }
}
