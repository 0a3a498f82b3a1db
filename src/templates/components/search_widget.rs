use crate::search::{FilterState, SortKey};
use chrono::NaiveDate;
use maud::{html, Markup};

const LOCATIONS: [&str; 5] = ["All", "Downtown", "Suburbs", "Uptown", "Waterfront"];
const BEDROOMS: [&str; 11] = ["All", "1", "2", "3", "4", "5", "6", "7", "8", "9", "Studio"];
const PETS: [&str; 5] = ["All", "Dogs Allowed", "Cats Allowed", "No Pets", "Contact Landlord"];
const FURNISHED: [&str; 4] = ["All", "Furnished", "Unfurnished", "Partial"];
const PERFECT_FOR: [&str; 5] = ["All", "Students", "Families", "Professionals", "Seniors"];
const BUILDING_TYPES: [&str; 5] = ["All", "Apartment", "House", "Condo", "Townhouse"];
const MOVE_IN: [&str; 2] = ["Available NOW", "Next Month"];

/// The filter card sitting above every browse grid. Submits as a GET
/// back to `action`, so filters live entirely in the query string.
pub fn search_widget(action: &str, filters: &FilterState, sort: SortKey) -> Markup {
    html! {
        form class="search-widget card" method="get" action=(action) {
            div class="filter-grid" {
                (filter_select("Location", "location", &LOCATIONS, filters.location.as_deref()))
                (filter_select("Bedrooms", "bedrooms", &BEDROOMS, filters.bedrooms.as_deref()))
                label class="filter-field" {
                    span { "Max Rent" }
                    input
                        type="text"
                        name="maxRent"
                        inputmode="numeric"
                        placeholder="No max"
                        value=[filters.max_rent.as_deref()];
                }
                (filter_select("Pets", "pets", &PETS, filters.pets.as_deref()))
                (filter_select("Furnished", "furnished", &FURNISHED, filters.furnished.as_deref()))
                (filter_select("Perfect For", "perfectFor", &PERFECT_FOR, filters.perfect_for.as_deref()))
                (filter_select("Building Type", "buildingType", &BUILDING_TYPES, filters.building_type.as_deref()))
                (filter_select("Move-in", "availableDate", &MOVE_IN, filters.available_date.as_deref()))
                label class="filter-field" {
                    span { "Move-in by" }
                    // a picked date overrides the move-in select above
                    input type="date" name="availableDate" value=[iso_date(filters.available_date.as_deref())];
                }
                label class="filter-field" {
                    span { "Sort" }
                    select name="sort" {
                        @for key in SortKey::ALL {
                            option value=(key.as_str()) selected[key == sort] { (key.label()) }
                        }
                    }
                }
            }
            div class="filter-actions" {
                input
                    type="search"
                    name="q"
                    placeholder="Search address, street or description"
                    value=[filters.query.as_deref()];
                button type="submit" class="btn" { "Search" }
                a href=(action) class="btn-reset" { "Reset" }
            }
        }
    }
}

fn filter_select(label: &str, name: &str, options: &[&str], current: Option<&str>) -> Markup {
    html! {
        label class="filter-field" {
            span { (label) }
            select name=(name) {
                @for option in options {
                    option
                        value=(option)
                        selected[current.is_some_and(|value| value.eq_ignore_ascii_case(option))]
                    { (option) }
                }
            }
        }
    }
}

/// Only echo a stored value back into the date input when it actually
/// is a date. "Next Month" and friends stay on the select.
fn iso_date(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok())
}
