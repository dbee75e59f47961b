//! Filtering and ordering of the loaded collection.
//!
//! Filters are conjunctive: an item survives only if it passes every
//! predicate the query specifies. Sorting is stable and only reorders the
//! already-filtered set; it never drops items.

use cardshelf_core::Item;
use serde::{Deserialize, Serialize};

/// Selector value meaning "no category/set filter".
const ALL: &str = "All";

/// Sort order for a view. Name comparisons are case-insensitive; price
/// comparisons use `market_price`. Ties keep their original relative order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

/// Inclusive price bounds over `market_price`.
///
/// A zero-width range (`lo == hi`) is a single exact match, which happens
/// naturally for a single-valued collection; it is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lo: f64,
    pub hi: f64,
}

impl PriceRange {
    #[must_use]
    pub fn new(lo: f64, hi: f64) -> Self {
        PriceRange { lo, hi }
    }

    /// Inclusive containment; tolerant of swapped bounds.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        let lo = self.lo.min(self.hi);
        let hi = self.lo.max(self.hi);
        price >= lo && price <= hi
    }
}

/// A read-only request against the collection.
///
/// Unset predicates (and the `"All"` selector value) mean "no filter", as
/// does blank search text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewQuery {
    pub category: Option<String>,
    pub collection_set: Option<String>,
    pub search_text: Option<String>,
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub sort: SortKey,
}

impl ViewQuery {
    /// A query that filters nothing and applies the default sort.
    #[must_use]
    pub fn all() -> Self {
        ViewQuery::default()
    }

    /// Convenience for the common "browse one category tab" request.
    #[must_use]
    pub fn for_category(category: &str) -> Self {
        ViewQuery {
            category: Some(category.to_string()),
            ..ViewQuery::default()
        }
    }
}

/// Applies the query's predicates and sort to the collection, returning the
/// surviving items in order. The input is never mutated; the result is
/// always a subset of `items`.
#[must_use]
pub fn run_query(items: &[Item], query: &ViewQuery) -> Vec<Item> {
    let mut out: Vec<Item> = items
        .iter()
        .filter(|item| matches_filters(item, query))
        .cloned()
        .collect();

    match query.sort {
        SortKey::NameAsc => out.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortKey::NameDesc => out.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
        SortKey::PriceAsc => out.sort_by(|a, b| a.market_price.total_cmp(&b.market_price)),
        SortKey::PriceDesc => out.sort_by(|a, b| b.market_price.total_cmp(&a.market_price)),
    }

    out
}

fn matches_filters(item: &Item, query: &ViewQuery) -> bool {
    if let Some(category) = selector(&query.category) {
        if !item.category_matches(category) {
            return false;
        }
    }
    if let Some(set) = selector(&query.collection_set) {
        if item.collection_set.trim().to_lowercase() != set.to_lowercase() {
            return false;
        }
    }
    if let Some(needle) = &query.search_text {
        if !item.name_contains(needle) {
            return false;
        }
    }
    if let Some(range) = &query.price_range {
        if !range.contains(item.market_price) {
            return false;
        }
    }
    true
}

/// Turns a selector option into an active filter value, treating `None`,
/// blank, and `"All"` as "no filter".
fn selector(value: &Option<String>) -> Option<&str> {
    let value = value.as_deref()?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(value)
    }
}

fn name_key(item: &Item) -> String {
    item.name.to_lowercase()
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
