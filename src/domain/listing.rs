use serde::{Deserialize, Deserializer, Serialize};

/// A listing as the remote API serves it. The same shape is stored in
/// the favorites snapshots, so it round-trips through serde unchanged.
///
/// Most fields are optional on the wire; the API fills display strings
/// (`title`, `price`, `city`) itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Display price, e.g. "$1,200/mo".
    #[serde(default)]
    pub price: String,
    /// Raw monthly rent. Only some payloads carry it; `rent_value`
    /// falls back to the digits of `price`.
    #[serde(default)]
    pub rent: Option<i64>,
    #[serde(default)]
    pub beds: i64,
    /// The API sends this as either a string or a number.
    #[serde(default = "default_baths", deserialize_with = "string_or_number")]
    pub baths: String,
    #[serde(default)]
    pub address: String,
    /// Display city line, e.g. "Syracuse, NY 13210".
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, rename = "availableDate")]
    pub available_date: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub pets: Option<String>,
    #[serde(default)]
    pub utilities: Option<String>,
    #[serde(default)]
    pub furnished: Option<String>,
    #[serde(default)]
    pub laundry: Option<String>,
    #[serde(default)]
    pub parking: Option<String>,
    #[serde(default)]
    pub building_type: Option<String>,
    #[serde(default)]
    pub perfect_for: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Opaque coordinates blob, passed through untouched.
    #[serde(default, rename = "latLng")]
    pub lat_lng: Option<serde_json::Value>,
    #[serde(default, rename = "typeCode")]
    pub type_code: Option<i64>,
    /// Neighborhood name, preferred over `city` when building slugs.
    #[serde(default)]
    pub location: Option<String>,
}

fn default_baths() -> String {
    "1".to_string()
}

/// Accepts `"1.5"` and `1.5` alike.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(n) if n.fract() == 0.0 => format!("{}", n as i64),
        Raw::Number(n) => n.to_string(),
    })
}

impl Listing {
    /// Numeric monthly rent used by price filters and sorts: the raw
    /// `rent` field when the API sent one, otherwise the digits pulled
    /// out of the display price. `None` when neither yields a number.
    pub fn rent_value(&self) -> Option<i64> {
        if let Some(rent) = self.rent {
            return Some(rent);
        }
        let digits: String = self.price.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }

    pub fn category(&self) -> ListingCategory {
        ListingCategory::from_type_code(self.type_code)
    }
}

/// The four listing feeds the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingCategory {
    Rentals,
    Sublets,
    Rooms,
    ShortTerm,
}

impl ListingCategory {
    pub const ALL: [ListingCategory; 4] = [
        ListingCategory::Rentals,
        ListingCategory::Sublets,
        ListingCategory::Rooms,
        ListingCategory::ShortTerm,
    ];

    /// Unknown or missing codes fall back to the general rentals feed.
    pub fn from_type_code(code: Option<i64>) -> Self {
        match code {
            Some(2) => ListingCategory::Sublets,
            Some(3) => ListingCategory::Rooms,
            Some(4) => ListingCategory::ShortTerm,
            _ => ListingCategory::Rentals,
        }
    }

    pub fn type_code(self) -> i64 {
        match self {
            ListingCategory::Rentals => 1,
            ListingCategory::Sublets => 2,
            ListingCategory::Rooms => 3,
            ListingCategory::ShortTerm => 4,
        }
    }

    /// First path segment of the browse and detail routes.
    pub fn route_prefix(self) -> &'static str {
        match self {
            ListingCategory::Rentals => "rentals",
            ListingCategory::Sublets => "sublets",
            ListingCategory::Rooms => "rooms",
            ListingCategory::ShortTerm => "short-term",
        }
    }

    pub fn from_route(segment: &str) -> Option<Self> {
        ListingCategory::ALL
            .into_iter()
            .find(|category| category.route_prefix() == segment)
    }

    /// Category feed path on the remote API.
    pub fn api_path(self) -> &'static str {
        match self {
            ListingCategory::Rentals => "/listings/rentals/",
            ListingCategory::Sublets => "/listings/sublets/",
            ListingCategory::Rooms => "/listings/rooms/",
            ListingCategory::ShortTerm => "/listings/short-term/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingCategory::Rentals => "Rentals",
            ListingCategory::Sublets => "Sublets",
            ListingCategory::Rooms => "Rooms",
            ListingCategory::ShortTerm => "Short Term",
        }
    }
}
