//! Normalization from loose sheet rows to canonical [`Item`]s.
//!
//! Price parsing is delegated to [`crate::price`]; this module focuses on
//! resolving the alias table against each row's columns and filling
//! type-appropriate defaults for whatever the source lacks. Normalization
//! is total: a row can never fail the load, and an empty row source yields
//! an empty collection rather than an error.

use cardshelf_core::{AliasTable, CanonicalField, Item};
use serde_json::Value;
use uuid::Uuid;

use crate::price::parse_price_value;
use crate::row::RawRow;

/// Name used when the source has no usable name cell.
const UNKNOWN_NAME: &str = "Unknown";
/// Category bucket for rows with no category, so every item is classifiable.
const FALLBACK_CATEGORY: &str = "Other";

/// Normalizes a batch of loose rows into canonical items.
///
/// For each canonical field, the first alias-table entry whose column
/// exists in the row wins; later candidates are ignored without error.
/// Source rows are not mutated, and every item gets a fresh id.
#[must_use]
pub fn normalize_rows(rows: &[RawRow], aliases: &AliasTable) -> Vec<Item> {
    let items: Vec<Item> = rows.iter().map(|row| normalize_row(row, aliases)).collect();
    tracing::debug!(rows = rows.len(), items = items.len(), "normalized sheet rows");
    items
}

fn normalize_row(row: &RawRow, aliases: &AliasTable) -> Item {
    let name = text_field(row, aliases, CanonicalField::Name)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let category = text_field(row, aliases, CanonicalField::Category)
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
    let collection_set =
        text_field(row, aliases, CanonicalField::CollectionSet).unwrap_or_default();
    let condition = text_field(row, aliases, CanonicalField::Condition).unwrap_or_default();
    let image_ref = text_field(row, aliases, CanonicalField::ImageRef);
    let external_link = text_field(row, aliases, CanonicalField::ExternalLink);

    let quantity = field_value(row, aliases, CanonicalField::Quantity)
        .map_or(0, parse_quantity);
    let list_price = field_value(row, aliases, CanonicalField::ListPrice)
        .map_or(0.0, parse_price_value);
    let market_price = field_value(row, aliases, CanonicalField::MarketPrice)
        .map_or(0.0, parse_price_value);

    Item {
        id: Uuid::new_v4(),
        name,
        category,
        collection_set,
        condition,
        image_ref,
        quantity,
        list_price,
        market_price,
        external_link,
    }
}

/// First cell in the row that can feed `field`, per alias-table order.
fn field_value<'a>(row: &'a RawRow, aliases: &AliasTable, field: CanonicalField) -> Option<&'a Value> {
    aliases.candidates(field).find_map(|column| row.get(column))
}

/// Resolves `field` to a trimmed, non-blank string, or `None`.
///
/// Numeric cells are rendered with `to_string` so a numeric grade column
/// (e.g. `10`) still lands in a text field.
fn text_field(row: &RawRow, aliases: &AliasTable, field: CanonicalField) -> Option<String> {
    let value = field_value(row, aliases, field)?;
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Coerces a loose cell into a non-negative count. Fractional values
/// truncate, negatives clamp to zero, garbage is zero.
fn parse_quantity(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() && v > 0.0 => {
            let truncated = v.trunc();
            if truncated >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                truncated as u32
            }
        }
        _ => 0,
    }
}
