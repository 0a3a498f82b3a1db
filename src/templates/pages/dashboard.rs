use crate::domain::listing::Listing;
use crate::domain::user::AuthUser;
use crate::slug::detail_path;
use crate::templates::components::notice;
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm {
    pub user: AuthUser,
    /// The landlord's own listings, matched by contact email.
    pub listings: Vec<Listing>,
    /// Checkout returns land here with a query flag to announce.
    pub notice: Option<String>,
}

pub fn dashboard_page(vm: &DashboardVm, nav: &NavVm) -> Markup {
    desktop_layout(
        "Dashboard",
        nav,
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Dashboard" }
                    a href="/landlord/listings/new" class="btn" { "Post a listing" }
                }
                p { "Signed in as " strong { (vm.user.display_name()) } }
                @if let Some(message) = &vm.notice {
                    (notice(message))
                }

                nav class="dashboard-links" {
                    a href="/landlord/billing" { "Billing" }
                    a href="/landlord/settings" { "Account settings" }
                }

                section class="card" {
                    h3 { "Your listings" }
                    @if vm.listings.is_empty() {
                        p class="empty-state" {
                            "You haven't posted any listings yet. "
                            a href="/landlord/listings/new" { "Post your first one." }
                        }
                    } @else {
                        div style="overflow-x: auto;" {
                            table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                                thead {
                                    tr {
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Listing" }
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Price" }
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Beds" }
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Available" }
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Actions" }
                                    }
                                }
                                tbody {
                                    @for listing in &vm.listings {
                                        tr {
                                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                                strong { (listing.title) }
                                                br;
                                                span style="color: #6b7280;" { (listing.address) }
                                            }
                                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (listing.price) }
                                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (listing.beds) }
                                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                                @match &listing.available_date {
                                                    Some(date) => (date),
                                                    None => "Now",
                                                }
                                            }
                                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                                a href=(detail_path(listing)) { "View" }
                                                " | "
                                                a href=(format!("/landlord/listings/{}/edit", listing.id)) { "Edit" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
