//! Total price parsing for spreadsheet cells.
//!
//! Sheet exports carry prices in whatever shape the owner typed them:
//! `"$1,234.56"`, `"100"`, `"  42.0 "`, `"N/A"`, or an actual number when
//! the export preserved the cell type. Everything funnels through here and
//! comes out as a finite, non-negative `f64`. Unparsable input is `0.0`,
//! never an error, so every numeric comparison downstream is total.
//!
//! Character filtering is done by hand rather than with `regex`, in the
//! same dependency-light style as the rest of the parsing in this workspace.

use serde_json::Value;

/// Currency markers stripped before numeric parsing.
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

/// Parses a textual price into a number.
///
/// Strips currency symbols, thousands separators, and surrounding
/// whitespace. Returns `0.0` for `None`, empty input, or any residue that
/// is not a plain non-negative decimal number. Never panics, never returns
/// NaN or a negative value.
///
/// Idempotent on its own output: parsing a stringified parsed price yields
/// the same value.
#[must_use]
pub fn parse_price(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && !CURRENCY_SYMBOLS.contains(c))
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        // Negative or non-finite values cannot price an inventory item.
        Ok(_) | Err(_) => 0.0,
    }
}

/// Parses a price out of a loose spreadsheet cell value.
///
/// Numeric cells pass through directly (clamped to finite, non-negative);
/// string cells go through [`parse_price`]; anything else (null, bool,
/// nested structures) is `0.0`.
#[must_use]
pub fn parse_price_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            _ => 0.0,
        },
        Value::String(s) => parse_price(Some(s)),
        _ => 0.0,
    }
}
