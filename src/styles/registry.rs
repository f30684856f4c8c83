//! The registry holding all generated style records.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::record::StyleRecord;

/// Category key for line styles.
pub const LINE: &str = "ls";
/// Category key for point styles.
pub const POINT: &str = "ps";
/// Category key for line-point styles.
pub const LINE_POINT: &str = "lps";
/// Category key for fill styles.
pub const FILL: &str = "fs";
/// Category key for arrow styles.
pub const ARROW: &str = "as";

/// Records by category and name, plus the ordered list of style names.
///
/// A record generated with prefix `ls`, name `A1` and suffix `m` lives in
/// category `lsm` under `A1` and is also reachable by its full name `lsA1m`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleRegistry {
    style_names: IndexSet<String>,
    categories: IndexMap<String, IndexMap<String, StyleRecord>>,
    #[serde(skip)]
    full_names: IndexMap<String, (String, String)>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under category `prefix + suffix` and key `name`.
    ///
    /// `name` is appended to the style names unless already present.
    /// An existing record with the same category and name is replaced.
    pub fn insert(&mut self, prefix: &str, name: &str, suffix: &str, record: StyleRecord) {
        let category = format!("{}{}", prefix, suffix);
        let full_name = format!("{}{}{}", prefix, name, suffix);
        self.add_name(name);
        self.ensure_category(&category)
            .insert(name.to_string(), record);
        self.full_names
            .insert(full_name, (category, name.to_string()));
    }

    /// Append `name` to the style names unless already present.
    pub fn add_name(&mut self, name: &str) {
        if !self.style_names.contains(name) {
            self.style_names.insert(name.to_string());
        }
    }

    /// Create an empty category if it does not exist yet.
    pub fn ensure_category(&mut self, category: &str) -> &mut IndexMap<String, StyleRecord> {
        self.categories.entry(category.to_string()).or_default()
    }

    /// Record by its full name, e.g. `lsMale` or `fsA3a`.
    pub fn get(&self, full_name: &str) -> Option<&StyleRecord> {
        let (category, name) = self.full_names.get(full_name)?;
        self.lookup(category, name)
    }

    /// Record by category and style name, e.g. (`lsm`, `A1`).
    pub fn lookup(&self, category: &str, name: &str) -> Option<&StyleRecord> {
        self.categories.get(category)?.get(name)
    }

    /// All records of a category in insertion order.
    pub fn category(&self, category: &str) -> Option<&IndexMap<String, StyleRecord>> {
        self.categories.get(category)
    }

    /// Category keys in creation order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Style names in first-use order.
    pub fn style_names(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.style_names.iter().map(String::as_str)
    }

    /// Full record names in insertion order.
    pub fn full_names(&self) -> impl Iterator<Item = &str> {
        self.full_names.keys().map(String::as_str)
    }

    /// Total number of records over all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::Color;
    use crate::styles::record::attr;

    fn record(color: &str) -> StyleRecord {
        StyleRecord::new().with(attr::COLOR, Color::from(color))
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = StyleRegistry::new();
        registry.insert("ls", "A1", "m", record("red"));

        assert_eq!(registry.get("lsA1m"), Some(&record("red")));
        assert_eq!(registry.lookup("lsm", "A1"), Some(&record("red")));
        assert!(registry.get("lsA1").is_none());
        assert_eq!(registry.categories().collect::<Vec<_>>(), vec!["lsm"]);
    }

    #[test]
    fn test_names_are_deduplicated_in_first_use_order() {
        let mut registry = StyleRegistry::new();
        registry.insert("ls", "B", "", record("red"));
        registry.insert("ls", "A", "", record("red"));
        registry.insert("ps", "B", "", record("blue"));

        assert_eq!(registry.style_names().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_insert_replaces_whole_record() {
        let mut registry = StyleRegistry::new();
        registry.insert("fs", "X", "s", record("red"));
        registry.insert("fs", "X", "s", record("blue"));

        assert_eq!(registry.category("fss").map(IndexMap::len), Some(1));
        assert_eq!(registry.get("fsXs"), Some(&record("blue")));
    }

    #[test]
    fn test_serialize_layout() {
        let mut registry = StyleRegistry::new();
        registry.insert("ls", "Male", "", record("blue"));
        let json = serde_json::to_value(&registry).unwrap();
        assert_eq!(json["style_names"], serde_json::json!(["Male"]));
        assert_eq!(json["categories"]["ls"]["Male"]["color"], "blue");
        assert!(json.get("full_names").is_none());
    }
}
