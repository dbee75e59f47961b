use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Canonical fields of an [`crate::Item`] that a source column can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Name,
    Category,
    CollectionSet,
    Condition,
    ImageRef,
    Quantity,
    ListPrice,
    MarketPrice,
    ExternalLink,
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CanonicalField::Name => "name",
            CanonicalField::Category => "category",
            CanonicalField::CollectionSet => "collection_set",
            CanonicalField::Condition => "condition",
            CanonicalField::ImageRef => "image_ref",
            CanonicalField::Quantity => "quantity",
            CanonicalField::ListPrice => "list_price",
            CanonicalField::MarketPrice => "market_price",
            CanonicalField::ExternalLink => "external_link",
        };
        write!(f, "{name}")
    }
}

/// One entry of the column alias table: a source column name mapped to the
/// canonical field it feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnAlias {
    /// Source column name, matched after lower-casing and trimming.
    pub column: String,
    pub field: CanonicalField,
}

/// Catalog configuration: category ordering and the column alias table,
/// loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Categories pinned to the front of the category list, in this order,
    /// displayed with exactly this spelling.
    #[serde(default = "default_priority_categories")]
    pub priority_categories: Vec<String>,
    /// User alias entries, consulted before the built-in table. Order
    /// matters: the first entry whose column exists in a row wins.
    #[serde(default)]
    pub column_aliases: Vec<ColumnAlias>,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

fn default_priority_categories() -> Vec<String> {
    vec![
        "Pokemon".to_string(),
        "One Piece".to_string(),
        "Magic the Gathering".to_string(),
    ]
}

// The dashboard renders a 3x3 grid per page and a 6-card featured strip.
fn default_page_size() -> usize {
    9
}

fn default_featured_count() -> usize {
    6
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            priority_categories: default_priority_categories(),
            column_aliases: Vec::new(),
            default_page_size: default_page_size(),
            featured_count: default_featured_count(),
        }
    }
}

impl CatalogConfig {
    /// Builds the resolved alias table: user entries first, then the
    /// built-ins covering the observed spreadsheet schemas.
    #[must_use]
    pub fn alias_table(&self) -> AliasTable {
        let mut entries: Vec<(String, CanonicalField)> = self
            .column_aliases
            .iter()
            .map(|alias| (alias.column.trim().to_lowercase(), alias.field))
            .collect();
        entries.extend(
            builtin_aliases()
                .iter()
                .map(|&(column, field)| (column.to_string(), field)),
        );
        AliasTable { entries }
    }
}

/// Ordered lookup table from source column name to canonical field.
///
/// Multiple columns may feed the same field; for each field the first entry
/// whose column exists in a row wins, and later entries are ignored without
/// error.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<(String, CanonicalField)>,
}

impl AliasTable {
    /// Source column names that can feed `field`, in lookup order.
    pub fn candidates(&self, field: CanonicalField) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(_, f)| *f == field)
            .map(|(column, _)| column.as_str())
    }
}

/// Built-in aliases for the column spellings seen across the cards and
/// slabs sheet exports. Both "spaced" and snake_case forms are listed
/// because some exports replace spaces with underscores in headers.
fn builtin_aliases() -> &'static [(&'static str, CanonicalField)] {
    &[
        ("name", CanonicalField::Name),
        ("card name", CanonicalField::Name),
        ("subject", CanonicalField::Name),
        ("type", CanonicalField::Category),
        ("card type", CanonicalField::Category),
        ("category", CanonicalField::Category),
        ("set", CanonicalField::CollectionSet),
        ("set name", CanonicalField::CollectionSet),
        ("collection set", CanonicalField::CollectionSet),
        ("condition", CanonicalField::Condition),
        ("grade", CanonicalField::Condition),
        ("psa grade", CanonicalField::Condition),
        ("psa_grade", CanonicalField::Condition),
        ("cardgrade", CanonicalField::Condition),
        ("card grade", CanonicalField::Condition),
        ("image link", CanonicalField::ImageRef),
        ("image_link", CanonicalField::ImageRef),
        ("image", CanonicalField::ImageRef),
        ("image url", CanonicalField::ImageRef),
        ("quantity", CanonicalField::Quantity),
        ("qty", CanonicalField::Quantity),
        ("card sell", CanonicalField::ListPrice),
        ("card_sell", CanonicalField::ListPrice),
        ("sell price", CanonicalField::ListPrice),
        ("sell_price", CanonicalField::ListPrice),
        ("my price", CanonicalField::ListPrice),
        ("market price", CanonicalField::MarketPrice),
        ("market_price", CanonicalField::MarketPrice),
        ("market raw", CanonicalField::MarketPrice),
        ("market_raw", CanonicalField::MarketPrice),
        ("price", CanonicalField::MarketPrice),
        ("raw", CanonicalField::MarketPrice),
        ("link on tcg player", CanonicalField::ExternalLink),
        ("link_on_tcg_player", CanonicalField::ExternalLink),
        ("link", CanonicalField::ExternalLink),
        ("tcg link", CanonicalField::ExternalLink),
    ]
}

/// Load and validate the catalog configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_catalog_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: CatalogConfig =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    validate_catalog(&config)?;

    Ok(config)
}

fn validate_catalog(config: &CatalogConfig) -> Result<(), ConfigError> {
    if config.default_page_size == 0 {
        return Err(ConfigError::Validation(
            "default_page_size must be positive".to_string(),
        ));
    }
    if config.featured_count == 0 {
        return Err(ConfigError::Validation(
            "featured_count must be positive".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for name in &config.priority_categories {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "priority category name must be non-empty".to_string(),
            ));
        }
        if !seen.insert(name.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate priority category: '{name}'"
            )));
        }
    }

    for alias in &config.column_aliases {
        if alias.column.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "column alias for field '{}' must be non-empty",
                alias.field
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
