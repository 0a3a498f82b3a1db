use crate::domain::listing::Listing;
use chrono::{Datelike, Local, NaiveDate};

/// One tagged field per filter control, mirroring the browse page's
/// query parameters. `None` means the control is blank and applies no
/// constraint; `"all"` sentinel values are kept verbatim and treated
/// as no constraint at match time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub location: Option<String>,
    pub available_date: Option<String>,
    pub bedrooms: Option<String>,
    pub max_rent: Option<String>,
    pub pets: Option<String>,
    pub furnished: Option<String>,
    pub perfect_for: Option<String>,
    pub building_type: Option<String>,
    pub query: Option<String>,
}

impl FilterState {
    /// Reads the known parameters out of a parsed query string.
    /// Unknown keys are ignored, blank values stay unset.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut state = FilterState::default();
        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_str() {
                "location" => &mut state.location,
                "availableDate" => &mut state.available_date,
                "bedrooms" => &mut state.bedrooms,
                "maxRent" => &mut state.max_rent,
                "pets" => &mut state.pets,
                "furnished" => &mut state.furnished,
                "perfectFor" => &mut state.perfect_for,
                "buildingType" => &mut state.building_type,
                "q" => &mut state.query,
                _ => continue,
            };
            *slot = Some(value.to_string());
        }
        state
    }

    /// Populated fields as query pairs, in a stable order. The same
    /// pairs serve the upstream fetch and rebuilt page links.
    pub fn to_pairs<'a>(&'a self) -> Vec<(&'static str, &'a str)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: &'a Option<String>| {
            if let Some(value) = value {
                pairs.push((key, value.as_str()));
            }
        };
        push("location", &self.location);
        push("availableDate", &self.available_date);
        push("bedrooms", &self.bedrooms);
        push("maxRent", &self.max_rent);
        push("pets", &self.pets);
        push("furnished", &self.furnished);
        push("perfectFor", &self.perfect_for);
        push("buildingType", &self.building_type);
        push("q", &self.query);
        pairs
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    /// True when the listing passes every populated filter.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_on(listing, Local::now().date_naive())
    }

    /// `matches` with an explicit notion of today, which anchors the
    /// "next month" availability cutoff.
    pub fn matches_on(&self, listing: &Listing, today: NaiveDate) -> bool {
        if let Some(value) = &self.location {
            if !location_matches(value, listing) {
                return false;
            }
        }
        if let Some(value) = &self.available_date {
            if !available_date_matches(value, listing, today) {
                return false;
            }
        }
        if let Some(value) = &self.bedrooms {
            if !bedrooms_matches(value, listing) {
                return false;
            }
        }
        if let Some(value) = &self.max_rent {
            if !max_rent_matches(value, listing) {
                return false;
            }
        }
        if let Some(value) = &self.pets {
            if !pets_matches(value, listing) {
                return false;
            }
        }
        if let Some(value) = &self.furnished {
            if !furnished_matches(value, listing) {
                return false;
            }
        }
        if let Some(value) = &self.perfect_for {
            if !perfect_for_matches(value, listing) {
                return false;
            }
        }
        if let Some(value) = &self.building_type {
            if !building_type_matches(value, listing) {
                return false;
            }
        }
        if let Some(value) = &self.query {
            if !query_matches(value, listing) {
                return false;
            }
        }
        true
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn location_matches(value: &str, listing: &Listing) -> bool {
    if value.eq_ignore_ascii_case("all") {
        return true;
    }
    contains_ci(listing.location.as_deref().unwrap_or(""), value)
        || contains_ci(&listing.address, value)
        || contains_ci(&listing.city, value)
}

fn building_type_matches(value: &str, listing: &Listing) -> bool {
    if value.to_lowercase().contains("all") {
        return true;
    }
    contains_ci(listing.building_type.as_deref().unwrap_or(""), value)
}

/// Accepts the select options ("Studio", "2", "4+ Bedrooms") as well
/// as bare digits. Values it cannot read apply no constraint.
fn bedrooms_matches(value: &str, listing: &Listing) -> bool {
    let wanted = value.trim().to_lowercase();
    if wanted == "all" {
        return true;
    }
    if wanted == "studio" {
        return listing.beds == 0;
    }
    if !wanted.is_empty() && wanted.chars().all(|c| c.is_ascii_digit()) {
        return wanted.parse().map_or(true, |n: i64| listing.beds == n);
    }
    if wanted.contains("bedroom") {
        let digits: String = wanted.chars().filter(|c| c.is_ascii_digit()).collect();
        if let Ok(n) = digits.parse::<i64>() {
            return if wanted.contains('+') {
                listing.beds >= n
            } else {
                listing.beds == n
            };
        }
    }
    true
}

/// An all-digit budget caps `rent_value`. Listings whose rent cannot
/// be determined never satisfy an active cap. Free-text budgets apply
/// no constraint.
fn max_rent_matches(value: &str, listing: &Listing) -> bool {
    let raw = value.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    let Ok(cap) = raw.parse::<i64>() else {
        return true;
    };
    match listing.rent_value() {
        Some(rent) => rent <= cap,
        None => false,
    }
}

fn pets_matches(value: &str, listing: &Listing) -> bool {
    let wanted = value.trim().to_lowercase();
    if wanted == "all" {
        return true;
    }
    let text = listing.pets.as_deref().unwrap_or("").to_lowercase();
    if wanted.contains("dog") {
        ["dog", "yes", "allowed"].iter().any(|t| text.contains(t))
    } else if wanted.contains("cat") {
        ["cat", "yes", "allowed"].iter().any(|t| text.contains(t))
    } else if wanted.contains("no") {
        text.is_empty() || text.contains("no")
    } else {
        true
    }
}

fn furnished_matches(value: &str, listing: &Listing) -> bool {
    let wanted = value.trim().to_lowercase();
    if wanted == "all" {
        return true;
    }
    let text = listing.furnished.as_deref().unwrap_or("").to_lowercase();
    match wanted.as_str() {
        "furnished" => text.contains("yes") || text.contains("full") || text == "furnished",
        "unfurnished" => text.is_empty() || text.contains("no") || text.contains("unfurnished"),
        "partially furnished" | "partial" => text.contains("partial"),
        _ => true,
    }
}

fn perfect_for_matches(value: &str, listing: &Listing) -> bool {
    if value.eq_ignore_ascii_case("all") {
        return true;
    }
    contains_ci(listing.perfect_for.as_deref().unwrap_or(""), value)
}

/// Move-in cutoff the listing must be available by, or `None` when
/// the value applies no constraint ("Available Now", free text).
fn availability_cutoff(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    let wanted = value.trim().to_lowercase();
    if wanted.is_empty() || wanted == "all" || wanted == "available now" || wanted == "immediate" {
        return None;
    }
    if wanted == "next month" {
        let (year, month) = if today.month() == 12 {
            (today.year() + 1, 1)
        } else {
            (today.year(), today.month() + 1)
        };
        return NaiveDate::from_ymd_opt(year, month, 1);
    }
    let raw = value.trim();
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

fn available_date_matches(value: &str, listing: &Listing, today: NaiveDate) -> bool {
    let Some(cutoff) = availability_cutoff(value, today) else {
        return true;
    };
    listing_available_on(listing).is_some_and(|date| date <= cutoff)
}

/// The API serializes move-in dates as ISO `%Y-%m-%d`; manually
/// entered listings sometimes carry `%m/%d/%Y`. "Available Now" and
/// friends have no date.
fn listing_available_on(listing: &Listing) -> Option<NaiveDate> {
    let raw = listing.available_date.as_deref()?.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

fn query_matches(value: &str, listing: &Listing) -> bool {
    let needle = value.trim();
    if needle.is_empty() {
        return true;
    }
    [
        listing.title.as_str(),
        listing.address.as_str(),
        listing.city.as_str(),
        listing.location.as_deref().unwrap_or(""),
        listing.building_type.as_deref().unwrap_or(""),
        listing.details.as_deref().unwrap_or(""),
        listing.zip.as_deref().unwrap_or(""),
    ]
    .iter()
    .any(|field| contains_ci(field, needle))
}
