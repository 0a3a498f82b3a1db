use crate::domain::listing::ListingCategory;
use maud::{html, Markup, DOCTYPE};

/// Everything the site chrome needs on every page.
#[derive(Debug, Clone, Default)]
pub struct NavVm {
    pub signed_in: bool,
    pub is_admin: bool,
    pub favorites_count: usize,
}

pub fn desktop_layout(title: &str, nav: &NavVm, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Orange Housing" }
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#ea580c"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="icon icon-tabler icon-tabler-home"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        h3 { "Orange Housing" }
                    }
                    nav {
                        ul {
                            @for category in ListingCategory::ALL {
                                li {
                                    a href=(format!("/{}", category.route_prefix())) { (category.label()) }
                                }
                            }
                            li {
                                a href="/favorites" {
                                    "Favorites"
                                    @if nav.favorites_count > 0 {
                                        span class="badge" { (nav.favorites_count) }
                                    }
                                }
                            }
                            @if nav.is_admin {
                                li { a href="/admin" { "Admin" } }
                            }
                        }
                    }
                    div class="account-links" {
                        @if nav.signed_in {
                            a href="/landlord/dashboard" class="text-base font-medium hover:text-blue-600" { "My Listings" }
                            form action="/landlord/logout" method="post" class="inline-form" {
                                button type="submit" class="link-button" { "Log out" }
                            }
                        } @else {
                            a href="/landlord/login" class="text-base font-medium hover:text-blue-600" { "Landlord Login" }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "Orange Housing. Apartments, homes and rooms for rent in Syracuse, NY." }
                }
            }
        }
    }
}
