//! The sanitized filter descriptor executed by a [`RestaurantStore`].
//!
//! [`RestaurantStore`]: crate::db::traits::RestaurantStore

use super::params::SearchParameters;

/// A validated, sanitized restaurant filter.
///
/// Built only from [`SearchParameters`] (already trimmed and coerced), so a
/// store never sees raw request input. Construction is a pure function of the
/// parameters; a partially-applied filter cannot be observed.
///
/// All string matching is case-insensitive with literal (escaped) semantics:
/// - `city` must match the record's city exactly.
/// - `cuisines` must **each** match some cuisine entry as a substring (AND
///   across selected cuisines).
/// - `text` must match the record's name or some cuisine entry as a
///   substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantFilter {
    pub city: Option<String>,
    pub cuisines: Vec<String>,
    pub text: Option<String>,
}

impl RestaurantFilter {
    /// The base filter: city scoping only.
    ///
    /// Used for the early-exit count before the cuisine and text clauses are
    /// built at all.
    pub fn city_only(params: &SearchParameters) -> Self {
        Self {
            city: non_empty(&params.city),
            cuisines: Vec::new(),
            text: None,
        }
    }

    /// The full filter: city scoping plus cuisine and free-text clauses.
    pub fn from_params(params: &SearchParameters) -> Self {
        Self {
            city: non_empty(&params.city),
            cuisines: params.cuisines.clone(),
            text: non_empty(&params.text),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
