//! Search parameter parsing and sanitization.
//!
//! Everything arriving from the HTTP layer is untrusted text. Malformed
//! values are never an error here: they coerce to documented defaults
//! (unknown sort options fall back to `lastUpdated`, bad page numbers to 1)
//! so the search endpoint stays maximally permissive.

/// Number of restaurants per result page.
pub const PAGE_SIZE: u32 = 10;

/// Sort option as requested by the client.
///
/// `BestMatch` is not a sortable field: it only selects relevance mode when a
/// free-text query is present, and degrades to `LastUpdated` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    LastUpdated,
    RestaurantName,
    DeliveryPrice,
    BestMatch,
}

impl SortOption {
    /// Parse a raw `sortOption` value against the allow-list.
    ///
    /// Anything unrecognized falls back to `LastUpdated`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "lastUpdated" => Self::LastUpdated,
            "restaurantName" => Self::RestaurantName,
            "deliveryPrice" => Self::DeliveryPrice,
            "bestMatch" => Self::BestMatch,
            _ => Self::LastUpdated,
        }
    }

    /// The record field to sort by in field-sort mode.
    pub fn field(self) -> SortField {
        match self {
            Self::LastUpdated | Self::BestMatch => SortField::LastUpdated,
            Self::RestaurantName => SortField::RestaurantName,
            Self::DeliveryPrice => SortField::DeliveryPrice,
        }
    }
}

/// A sortable restaurant field. Always applied descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    LastUpdated,
    RestaurantName,
    DeliveryPrice,
}

impl SortField {
    /// Column name in the `restaurants` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::LastUpdated => "last_updated",
            Self::RestaurantName => "name",
            Self::DeliveryPrice => "delivery_price",
        }
    }
}

/// Sanitized search parameters for one request.
#[derive(Debug, Clone)]
pub struct SearchParameters {
    /// Trimmed city, possibly empty (empty means no city scoping).
    pub city: String,
    /// Trimmed free-text query, possibly empty.
    pub text: String,
    /// Trimmed, de-duplicated cuisine selections, empty entries discarded.
    pub cuisines: Vec<String>,
    pub sort: SortOption,
    /// Always >= 1.
    pub page: u32,
}

impl SearchParameters {
    /// Build sanitized parameters from the raw request values.
    pub fn from_request(
        city: &str,
        search_query: &str,
        selected_cuisines: &str,
        sort_option: &str,
        page: &str,
    ) -> Self {
        Self {
            city: city.trim().to_string(),
            text: search_query.trim().to_string(),
            cuisines: parse_cuisines(selected_cuisines),
            sort: SortOption::parse(sort_option),
            page: parse_page(page),
        }
    }
}

/// Parse a positive page number; anything else is page 1.
fn parse_page(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Split a comma-separated cuisine list into trimmed, unique, non-empty
/// entries, preserving request order.
fn parse_cuisines(raw: &str) -> Vec<String> {
    let mut cuisines: Vec<String> = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if cuisines.iter().any(|seen| seen == entry) {
            continue;
        }
        cuisines.push(entry.to_string());
    }
    cuisines
}
