//! Restaurant catalog records.
//!
//! Wire format is camelCase JSON; storage is the `restaurants` table from
//! migration 0001. Invariants carried by the schema (non-empty text fields,
//! non-negative numbers) are mirrored here as `validator` rules so stores
//! without CHECK constraints enforce the same contract.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A single item on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Generated at creation when the submitting client does not supply one.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    pub price: Decimal,
}

/// A persisted restaurant record. The search API only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    /// Owning user account; not used by search.
    pub owner_id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(custom(function = "non_negative"))]
    pub delivery_price: Decimal,
    #[validate(range(min = 0))]
    pub estimated_delivery_time: i32,
    /// Order is not meaningful for search; duplicates are permitted.
    #[validate(custom(function = "non_empty_entries"))]
    pub cuisines: Vec<String>,
    #[sqlx(json)]
    #[validate(nested)]
    pub menu_items: Vec<MenuItem>,
    #[validate(length(min = 1))]
    pub image_url: String,
    /// Defaults to creation time when unset.
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}

fn non_empty_entries(entries: &[String]) -> Result<(), ValidationError> {
    if entries.iter().any(|e| e.trim().is_empty()) {
        return Err(ValidationError::new("empty_cuisine"));
    }
    Ok(())
}
