//! Search query construction: parameter sanitization, filter descriptors,
//! and SQL compilation.

pub mod escape;
pub mod filter;
pub mod params;
pub(crate) mod sql;

pub use filter::RestaurantFilter;
pub use params::{SearchParameters, SortField, SortOption, PAGE_SIZE};
