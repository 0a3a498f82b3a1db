use crate::domain::listing::Listing;
use crate::slug::detail_path;
use crate::templates::components::notice;
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AdminVm {
    pub pending: Vec<Listing>,
    pub notice: Option<String>,
}

pub fn admin_page(vm: &AdminVm, nav: &NavVm) -> Markup {
    desktop_layout(
        "Review queue",
        nav,
        html! {
            main class="container" {
                h1 { "Review queue" }
                p class="lead" { "New listings stay hidden until someone approves them here." }
                @if let Some(message) = &vm.notice {
                    (notice(message))
                }

                @if vm.pending.is_empty() {
                    div class="empty-state card" {
                        p { "No listings waiting for review." }
                    }
                } @else {
                    div class="card" {
                        div style="overflow-x: auto;" {
                            table style="width: 100%; border-collapse: collapse;" {
                                thead {
                                    tr {
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Listing" }
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Price" }
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Landlord" }
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Decision" }
                                    }
                                }
                                tbody {
                                    @for listing in &vm.pending {
                                        tr {
                                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                                a href=(detail_path(listing)) { strong { (listing.title) } }
                                                br;
                                                span style="color: #6b7280;" { (listing.address) ", " (listing.city) }
                                            }
                                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (listing.price) }
                                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                                @if let Some(name) = &listing.contact_name { (name) br; }
                                                @if let Some(email) = &listing.contact_email {
                                                    span style="color: #6b7280;" { (email) }
                                                }
                                            }
                                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                                div style="display: flex; gap: 8px;" {
                                                    form action=(format!("/admin/listings/{}/approve", listing.id)) method="post" style="margin: 0;" {
                                                        button type="submit" class="btn" { "Approve" }
                                                    }
                                                    form action=(format!("/admin/listings/{}/reject", listing.id)) method="post" style="margin: 0;" {
                                                        button type="submit" class="btn-reset" { "Reject" }
                                                    }
                                                }
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
