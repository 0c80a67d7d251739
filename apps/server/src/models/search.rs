//! Search response envelope.

use serde::{Deserialize, Serialize};

use super::Restaurant;

/// One page of search results plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub data: Vec<Restaurant>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Records matching the filter, ignoring pagination.
    pub total: i64,
    pub page: u32,
    /// Always >= 1, even for an empty result set.
    pub pages: u32,
}

impl SearchPage {
    /// The short-circuit result when the city has no restaurants at all.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination {
                total: 0,
                page: 1,
                pages: 1,
            },
        }
    }
}
