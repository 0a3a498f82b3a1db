use crate::domain::listing::{Listing, ListingCategory};
use crate::templates::components::{favorite_button, map_preview};
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DetailVm {
    pub listing: Listing,
    pub category: ListingCategory,
    pub is_favorite: bool,
}

pub fn listing_detail_page(vm: &DetailVm, nav: &NavVm) -> Markup {
    let listing = &vm.listing;
    desktop_layout(
        &listing.title,
        nav,
        html! {
            main class="container" {
                nav class="breadcrumbs" {
                    a href="/" { "Home" }
                    " / "
                    a href=(format!("/{}", vm.category.route_prefix())) { (vm.category.label()) }
                    " / "
                    span { (listing.title) }
                }

                div class="detail-header" {
                    div {
                        h1 { (listing.title) }
                        p class="card-address" { (listing.address) ", " (listing.city) }
                    }
                    div class="detail-header-actions" {
                        p class="card-price" { (listing.price) }
                        (favorite_button(listing.id, vm.is_favorite))
                    }
                }

                @if !listing.images.is_empty() {
                    div class="gallery" {
                        img class="gallery-main" src=(listing.images[0]) alt=(listing.title);
                        @if listing.images.len() > 1 {
                            div class="gallery-thumbs" {
                                @for image in &listing.images[1..] {
                                    img src=(image) alt="" loading="lazy";
                                }
                            }
                        }
                    }
                }

                div class="detail-columns" {
                    section class="card" {
                        h2 { "Details" }
                        table class="facts" {
                            tbody {
                                (fact_row("Bedrooms", &bed_label(listing.beds)))
                                (fact_row("Bathrooms", &listing.baths))
                                @if let Some(value) = &listing.available_date {
                                    (fact_row("Available", value))
                                }
                                @if let Some(value) = &listing.building_type {
                                    (fact_row("Building type", value))
                                }
                                @if let Some(value) = &listing.pets {
                                    (fact_row("Pets", value))
                                }
                                @if let Some(value) = &listing.utilities {
                                    (fact_row("Utilities", value))
                                }
                                @if let Some(value) = &listing.furnished {
                                    (fact_row("Furnished", value))
                                }
                                @if let Some(value) = &listing.laundry {
                                    (fact_row("Laundry", value))
                                }
                                @if let Some(value) = &listing.parking {
                                    (fact_row("Parking", value))
                                }
                                @if let Some(value) = &listing.perfect_for {
                                    (fact_row("Perfect for", value))
                                }
                            }
                        }
                        @if let Some(details) = &listing.details {
                            h2 { "About this place" }
                            p class="details-text" { (details) }
                        }
                    }

                    aside {
                        section class="card contact-card" {
                            h2 { "Contact" }
                            @if let Some(name) = &listing.contact_name {
                                p { (name) }
                            }
                            @if let Some(number) = &listing.contact_number {
                                p { a href=(format!("tel:{number}")) { (number) } }
                            }
                            @if let Some(email) = &listing.contact_email {
                                p { a href=(format!("mailto:{email}")) { (email) } }
                            }
                            @if listing.contact_name.is_none()
                                && listing.contact_number.is_none()
                                && listing.contact_email.is_none() {
                                p { "No contact details were provided." }
                            }
                        }
                        (map_preview(&format!("{}, {}", listing.address, listing.city)))
                    }
                }
            }
        },
    )
}

fn fact_row(label: &str, value: &str) -> Markup {
    html! {
        tr {
            th { (label) }
            td { (value) }
        }
    }
}

fn bed_label(beds: i64) -> String {
    if beds == 0 {
        "Studio".to_string()
    } else {
        beds.to_string()
    }
}
