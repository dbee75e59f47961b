use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One inventory entry (a raw card or a graded slab) after normalization,
/// canonical across the different spreadsheet schemas it may come from.
///
/// Items are created fresh on every data load; there is no update-in-place.
/// A reload replaces the whole collection, and absence from the next load is
/// the only removal mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier assigned when the item is normalized.
    pub id: Uuid,
    /// Display name. `"Unknown"` when the source cell is absent or blank.
    pub name: String,
    /// Free-text classification label (e.g. `"Pokemon"`). Compared
    /// case-insensitively everywhere; `"Other"` when the source has none.
    pub category: String,
    /// Set / expansion the item belongs to. Empty when unknown.
    pub collection_set: String,
    /// Condition for raw cards, grade for slabs (e.g. `"PSA 10"`). Empty
    /// when unknown.
    pub condition: String,
    /// Image URI. `None` means "no image"; renderers supply a placeholder.
    pub image_ref: Option<String>,
    /// Copies on hand. Non-negative by construction.
    pub quantity: u32,
    /// Asking price. `0.0` when absent or unparsable.
    pub list_price: f64,
    /// Current market price. `0.0` when absent or unparsable, so numeric
    /// comparisons over a collection are always total.
    pub market_price: f64,
    /// Link to an external listing (e.g. TCGPlayer), if the sheet has one.
    pub external_link: Option<String>,
}

impl Item {
    /// Returns `true` if this item's category matches `other`
    /// case-insensitively. Unicode lower-casing, so accented category
    /// names compare the same way the category list groups them.
    #[must_use]
    pub fn category_matches(&self, other: &str) -> bool {
        self.category.trim().to_lowercase() == other.trim().to_lowercase()
    }

    /// Returns `true` if `needle` occurs in the item name, ignoring case.
    /// A blank needle matches everything.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        let needle = needle.trim();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Total market value represented by this entry (price × quantity).
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.market_price * f64::from(self.quantity)
    }
}
