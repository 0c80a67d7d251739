//! Compilation of [`RestaurantFilter`] into parameterized Postgres SQL.
//!
//! Every piece of request-derived text travels as a bind value, never as SQL
//! text. Pattern operands are escaped with [`escape_like_pattern`] and matched
//! under an explicit `ESCAPE E'\\'` clause so they keep literal-substring
//! semantics.

use super::escape::escape_like_pattern;
use super::filter::RestaurantFilter;
use super::params::SortField;

/// Bind value for a built query, in `$1..$n` order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BindValue {
    Text(String),
    Int(i64),
}

const COLUMNS: &str = "id, owner_id, name, city, country, delivery_price, \
     estimated_delivery_time, cuisines, menu_items, image_url, last_updated";

/// Expression matching the GIN index created in migration 0001.
const SEARCH_VECTOR: &str = "restaurant_search_vector(name, cuisines)";

fn push_text(binds: &mut Vec<BindValue>, value: String) -> usize {
    binds.push(BindValue::Text(value));
    binds.len()
}

fn push_int(binds: &mut Vec<BindValue>, value: i64) -> usize {
    binds.push(BindValue::Int(value));
    binds.len()
}

/// Render the WHERE clause for a filter, appending its bind values.
fn build_where(filter: &RestaurantFilter, binds: &mut Vec<BindValue>) -> String {
    let mut clauses = Vec::new();

    if let Some(city) = &filter.city {
        // No wildcards in the operand, so ILIKE is an exact case-insensitive
        // match here.
        let idx = push_text(binds, escape_like_pattern(city));
        clauses.push(format!("city ILIKE ${} ESCAPE E'\\\\'", idx));
    }

    // One EXISTS per selected cuisine: the record must match every one.
    for cuisine in &filter.cuisines {
        let idx = push_text(binds, format!("%{}%", escape_like_pattern(cuisine)));
        clauses.push(format!(
            "EXISTS (SELECT 1 FROM unnest(cuisines) AS cuisine WHERE cuisine ILIKE ${} ESCAPE E'\\\\')",
            idx
        ));
    }

    if let Some(text) = &filter.text {
        let name_idx = push_text(binds, format!("%{}%", escape_like_pattern(text)));
        let cuisine_idx = push_text(binds, format!("%{}%", escape_like_pattern(text)));
        clauses.push(format!(
            "(name ILIKE ${} ESCAPE E'\\\\' OR EXISTS (SELECT 1 FROM unnest(cuisines) AS cuisine WHERE cuisine ILIKE ${} ESCAPE E'\\\\'))",
            name_idx, cuisine_idx
        ));
    }

    if clauses.is_empty() {
        "TRUE".to_string()
    } else {
        clauses.join(" AND ")
    }
}

/// SELECT page of rows in field-sort mode (descending).
pub(crate) fn build_select(
    filter: &RestaurantFilter,
    sort: SortField,
    offset: u64,
    limit: u32,
) -> (String, Vec<BindValue>) {
    let mut binds = Vec::new();
    let where_clause = build_where(filter, &mut binds);
    let limit_idx = push_int(&mut binds, i64::from(limit));
    let offset_idx = push_int(&mut binds, offset as i64);
    let sql = format!(
        "SELECT {} FROM restaurants WHERE {} ORDER BY {} DESC LIMIT ${} OFFSET ${}",
        COLUMNS,
        where_clause,
        sort.column(),
        limit_idx,
        offset_idx
    );
    (sql, binds)
}

/// COUNT of rows matching the filter.
pub(crate) fn build_count(filter: &RestaurantFilter) -> (String, Vec<BindValue>) {
    let mut binds = Vec::new();
    let where_clause = build_where(filter, &mut binds);
    let sql = format!("SELECT COUNT(*) FROM restaurants WHERE {}", where_clause);
    (sql, binds)
}

/// SELECT page of rows in relevance mode: filter plus full-text match,
/// ordered by descending rank.
pub(crate) fn build_relevance_select(
    filter: &RestaurantFilter,
    text: &str,
    offset: u64,
    limit: u32,
) -> (String, Vec<BindValue>) {
    let mut binds = Vec::new();
    let where_clause = build_where(filter, &mut binds);
    let text_idx = push_text(&mut binds, text.to_string());
    let limit_idx = push_int(&mut binds, i64::from(limit));
    let offset_idx = push_int(&mut binds, offset as i64);
    let sql = format!(
        "SELECT {} FROM restaurants WHERE {} AND {} @@ websearch_to_tsquery('english', ${}) \
         ORDER BY ts_rank({}, websearch_to_tsquery('english', ${})) DESC LIMIT ${} OFFSET ${}",
        COLUMNS, where_clause, SEARCH_VECTOR, text_idx, SEARCH_VECTOR, text_idx, limit_idx, offset_idx
    );
    (sql, binds)
}

/// COUNT of rows matching the filter plus the full-text condition.
pub(crate) fn build_relevance_count(
    filter: &RestaurantFilter,
    text: &str,
) -> (String, Vec<BindValue>) {
    let mut binds = Vec::new();
    let where_clause = build_where(filter, &mut binds);
    let text_idx = push_text(&mut binds, text.to_string());
    let sql = format!(
        "SELECT COUNT(*) FROM restaurants WHERE {} AND {} @@ websearch_to_tsquery('english', ${})",
        where_clause, SEARCH_VECTOR, text_idx
    );
    (sql, binds)
}
