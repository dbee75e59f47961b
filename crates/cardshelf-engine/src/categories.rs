//! Category list derivation for the browsing tabs.
//!
//! Ordering is a user-facing contract: configured priority categories come
//! first, in configured order and spelling, followed by every other
//! observed category title-cased and sorted alphabetically. Identity is
//! case-insensitive throughout, so `"pokemon"`, `"Pokemon"` and `"POKEMON"`
//! are one category.

use std::collections::BTreeMap;

use cardshelf_core::Item;

/// Derives the ordered category list for a loaded collection.
///
/// A priority name is included iff some item matches it case-insensitively,
/// and is emitted with the configured spelling rather than whatever casing
/// the data used. No category appears twice; an empty collection yields an
/// empty list.
#[must_use]
pub fn build_category_list(items: &[Item], priority: &[String]) -> Vec<String> {
    // Lowercased identity -> raw representative, first occurrence kept.
    let mut observed: BTreeMap<String, String> = BTreeMap::new();
    for item in items {
        let raw = item.category.trim();
        if raw.is_empty() {
            continue;
        }
        observed
            .entry(raw.to_lowercase())
            .or_insert_with(|| raw.to_string());
    }

    let mut out = Vec::new();
    for name in priority {
        if observed.remove(&name.trim().to_lowercase()).is_some() {
            out.push(name.trim().to_string());
        }
    }

    let mut rest: Vec<String> = observed.into_values().map(|raw| title_case(&raw)).collect();
    rest.sort();
    out.extend(rest);
    out
}

/// Title-cases a category for display: any letter that follows a
/// non-letter is upper-cased, every other letter lower-cased. Hyphenated
/// names capitalize each segment, so `"yu-gi-oh"` becomes `"Yu-Gi-Oh"`.
fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_is_alpha = false;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(ch);
            prev_is_alpha = false;
        }
    }
    out
}
