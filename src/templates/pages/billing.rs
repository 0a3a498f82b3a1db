use crate::domain::billing::SubscriptionDetails;
use crate::domain::listing::Listing;
use crate::templates::components::{error_notice, notice};
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct BillingRow {
    pub listing: Listing,
    /// `None` when the subscription lookup failed for this listing.
    pub details: Option<SubscriptionDetails>,
}

pub struct BillingVm {
    pub rows: Vec<BillingRow>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

pub fn billing_page(vm: &BillingVm, nav: &NavVm) -> Markup {
    desktop_layout(
        "Billing",
        nav,
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Billing" }
                    form action="/landlord/billing/portal" method="post" {
                        button type="submit" class="btn" { "Open billing portal" }
                    }
                }
                p class="lead" {
                    "Each listing carries its own subscription. Activate one to keep it visible to renters."
                }
                @if let Some(message) = &vm.notice {
                    (notice(message))
                }
                @if let Some(message) = &vm.error {
                    (error_notice(message))
                }

                @if vm.rows.is_empty() {
                    div class="empty-state card" {
                        p { "No listings to bill yet." }
                        a href="/landlord/listings/new" { "Post a listing" }
                    }
                }
                @for row in &vm.rows {
                    div class="card billing-row" {
                        div class="billing-listing" {
                            strong { (row.listing.title) }
                            br;
                            span style="color: #6b7280;" { (row.listing.address) }
                        }
                        div class="billing-status" {
                            @match &row.details {
                                Some(details) => {
                                    span class=(status_class(details)) { (details.status) }
                                    @if let Some(date) = details.period_end_display() {
                                        br;
                                        @if details.cancel_at_period_end {
                                            span { "Ends " (date) }
                                        } @else {
                                            span { "Renews " (date) }
                                        }
                                    }
                                }
                                None => span class="status-badge unknown" { "Status unavailable" },
                            }
                        }
                        div class="billing-actions" {
                            @if row.details.as_ref().is_some_and(|details| details.is_active()) {
                                @if !row.details.as_ref().is_some_and(|details| details.cancel_at_period_end) {
                                    form action="/landlord/billing/cancel" method="post" {
                                        input type="hidden" name="listing_id" value=(row.listing.id);
                                        button type="submit" class="btn-reset" { "Cancel subscription" }
                                    }
                                }
                            } @else {
                                form action="/landlord/billing/checkout" method="post" {
                                    input type="hidden" name="listing_id" value=(row.listing.id);
                                    button type="submit" class="btn" { "Activate listing" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn status_class(details: &SubscriptionDetails) -> &'static str {
    if details.is_active() {
        "status-badge active"
    } else {
        "status-badge inactive"
    }
}
