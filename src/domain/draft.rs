use crate::domain::listing::Listing;
use serde::Serialize;

/// Body of the create and update listing endpoints. Field names match
/// the API's column names, which differ from the read model in places
/// (`date_avail` vs `availableDate`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingDraft {
    pub user_id: u64,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_avail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnished: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laundry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl ListingDraft {
    /// Builds a draft from submitted form fields. Blank inputs become
    /// `None` so the API's own defaults apply.
    pub fn from_form(user_id: u64, fields: &[(String, String)]) -> Self {
        let text = |name: &str| -> Option<String> {
            fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let number = |name: &str| -> Option<i64> { text(name).and_then(|raw| raw.parse().ok()) };

        ListingDraft {
            user_id,
            address: text("address").unwrap_or_default(),
            zip: text("zip"),
            beds: number("beds"),
            baths: text("baths"),
            rent: number("rent"),
            utilities: text("utilities"),
            pets: text("pets"),
            details: text("details"),
            date_avail: text("date_avail"),
            location: text("location"),
            building_type: text("building_type"),
            furnished: text("furnished"),
            laundry: text("laundry"),
            parking: text("parking"),
            contact_name: text("contact_name"),
            contact_number: text("contact_number"),
            contact_email: text("contact_email"),
        }
    }

    /// Prefill for the edit form from a fetched listing.
    pub fn from_listing(user_id: u64, listing: &Listing) -> Self {
        ListingDraft {
            user_id,
            address: listing.address.clone(),
            zip: listing.zip.clone(),
            beds: Some(listing.beds),
            baths: Some(listing.baths.clone()),
            rent: listing.rent_value(),
            utilities: listing.utilities.clone(),
            pets: listing.pets.clone(),
            details: listing.details.clone(),
            date_avail: listing.available_date.clone(),
            location: listing.location.clone(),
            building_type: listing.building_type.clone(),
            furnished: listing.furnished.clone(),
            laundry: listing.laundry.clone(),
            parking: listing.parking.clone(),
            contact_name: listing.contact_name.clone(),
            contact_number: listing.contact_number.clone(),
            contact_email: listing.contact_email.clone(),
        }
    }
}
