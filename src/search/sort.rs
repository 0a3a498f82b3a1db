use crate::domain::listing::Listing;
use std::cmp::Ordering;

/// Sort orders offered on the browse pages. `Default` keeps the API's
/// feed order untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    BedsDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Default,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::BedsDesc,
    ];

    /// Unknown values fall back to the feed order.
    pub fn parse(value: &str) -> Self {
        match value {
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "beds_desc" => SortKey::BedsDesc,
            _ => SortKey::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::BedsDesc => "beds_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Recommended",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::BedsDesc => "Most Bedrooms",
        }
    }

    /// Stable in-place sort, so equal keys keep their feed order.
    /// Listings without a readable rent sort after priced ones in both
    /// price directions.
    pub fn apply(self, listings: &mut [Listing]) {
        match self {
            SortKey::Default => {}
            SortKey::PriceAsc => listings.sort_by(|a, b| cmp_rent(a, b, false)),
            SortKey::PriceDesc => listings.sort_by(|a, b| cmp_rent(a, b, true)),
            SortKey::BedsDesc => listings.sort_by(|a, b| b.beds.cmp(&a.beds)),
        }
    }
}

fn cmp_rent(a: &Listing, b: &Listing, descending: bool) -> Ordering {
    match (a.rent_value(), b.rent_value()) {
        (Some(x), Some(y)) => {
            if descending {
                y.cmp(&x)
            } else {
                x.cmp(&y)
            }
        }
        // Unpriced listings go last either way.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
