use crate::domain::draft::ListingDraft;
use crate::templates::components::{error_notice, map_preview, photo_editor};
use crate::templates::layouts::desktop::NavVm;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListingFormVm {
    pub heading: String,
    /// Where the form posts back to.
    pub action: String,
    pub draft: ListingDraft,
    pub error: Option<String>,
}

impl ListingFormVm {
    pub fn create(user_id: u64) -> Self {
        ListingFormVm {
            heading: "Post a listing".to_string(),
            action: "/landlord/listings/new".to_string(),
            draft: ListingDraft {
                user_id,
                ..Default::default()
            },
            error: None,
        }
    }

    pub fn edit(listing_id: u64, draft: ListingDraft) -> Self {
        ListingFormVm {
            heading: "Edit listing".to_string(),
            action: format!("/landlord/listings/{listing_id}/edit"),
            draft,
            error: None,
        }
    }
}

pub fn listing_form_page(vm: &ListingFormVm, nav: &NavVm) -> Markup {
    let draft = &vm.draft;
    desktop_layout(
        &vm.heading,
        nav,
        html! {
            main class="container" {
                h1 { (vm.heading) }
                @if let Some(message) = &vm.error {
                    (error_notice(message))
                }

                form class="card listing-form" action=(vm.action) method="post" {
                    h3 { "Address" }
                    label class="form-field" {
                        span { "Street address" }
                        input
                            type="text"
                            name="address"
                            value=(draft.address)
                            required
                            hx-get="/landlord/map-preview"
                            hx-trigger="keyup changed delay:1s"
                            hx-target="#map-preview"
                            hx-swap="outerHTML";
                    }
                    (map_preview(&draft.address))
                    div class="form-row" {
                        label class="form-field" {
                            span { "Neighborhood" }
                            input type="text" name="location" value=[draft.location.as_deref()]
                                placeholder="Downtown, Westcott, ...";
                        }
                        label class="form-field" {
                            span { "ZIP" }
                            input type="text" name="zip" value=[draft.zip.as_deref()];
                        }
                    }

                    h3 { "The basics" }
                    div class="form-row" {
                        label class="form-field" {
                            span { "Bedrooms" }
                            input type="number" name="beds" min="0" value=[draft.beds];
                        }
                        label class="form-field" {
                            span { "Bathrooms" }
                            input type="text" name="baths" value=[draft.baths.as_deref()] placeholder="1.5";
                        }
                        label class="form-field" {
                            span { "Monthly rent ($)" }
                            input type="number" name="rent" min="0" value=[draft.rent];
                        }
                        label class="form-field" {
                            span { "Available from" }
                            input type="date" name="date_avail" value=[draft.date_avail.as_deref()];
                        }
                    }
                    div class="form-row" {
                        label class="form-field" {
                            span { "Building type" }
                            input type="text" name="building_type" value=[draft.building_type.as_deref()]
                                placeholder="Apartment, House, ...";
                        }
                        label class="form-field" {
                            span { "Utilities" }
                            input type="text" name="utilities" value=[draft.utilities.as_deref()]
                                placeholder="Heat and water included";
                        }
                    }
                    div class="form-row" {
                        label class="form-field" {
                            span { "Pets" }
                            input type="text" name="pets" value=[draft.pets.as_deref()]
                                placeholder="Cats allowed";
                        }
                        label class="form-field" {
                            span { "Furnished" }
                            input type="text" name="furnished" value=[draft.furnished.as_deref()];
                        }
                        label class="form-field" {
                            span { "Laundry" }
                            input type="text" name="laundry" value=[draft.laundry.as_deref()];
                        }
                        label class="form-field" {
                            span { "Parking" }
                            input type="text" name="parking" value=[draft.parking.as_deref()];
                        }
                    }
                    label class="form-field" {
                        span { "Description" }
                        textarea name="details" rows="6" { (draft.details.as_deref().unwrap_or("")) }
                    }

                    h3 { "Contact" }
                    div class="form-row" {
                        label class="form-field" {
                            span { "Name" }
                            input type="text" name="contact_name" value=[draft.contact_name.as_deref()];
                        }
                        label class="form-field" {
                            span { "Phone" }
                            input type="tel" name="contact_number" value=[draft.contact_number.as_deref()];
                        }
                        label class="form-field" {
                            span { "Email" }
                            input type="email" name="contact_email" value=[draft.contact_email.as_deref()];
                        }
                    }

                    button type="submit" class="btn" { "Save listing" }
                    p class="hint" { "New listings go live once an administrator approves them." }
                }

                (photo_editor())
            }
        },
    )
}
