//! Loosely-typed source rows, the input side of normalization.

use std::collections::BTreeMap;

use serde_json::Value;

/// One row from an external sheet export, before normalization.
///
/// Column names are lower-cased and whitespace-trimmed at insertion, so
/// lookups match however the source spelled its headers. Cells stay as
/// [`serde_json::Value`] because exports deliver a mix of strings and
/// numbers. Construction never fails; columns nobody maps are simply never
/// read.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: BTreeMap<String, Value>,
}

impl RawRow {
    #[must_use]
    pub fn new() -> Self {
        RawRow::default()
    }

    /// Inserts a cell under the normalized form of `column`. A later insert
    /// with a column differing only in case or padding overwrites.
    pub fn insert(&mut self, column: &str, value: Value) {
        self.cells.insert(column.trim().to_lowercase(), value);
    }

    /// Looks up a cell by source column name, case- and padding-insensitive.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(&column.trim().to_lowercase())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

impl FromIterator<(String, Value)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut row = RawRow::new();
        for (column, value) in iter {
            row.insert(&column, value);
        }
        row
    }
}
