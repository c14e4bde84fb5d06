//! Alternate-key index tables
//!
//! An [`IndexTable`] maps one alternate field's values to record primary ids.
//! Tables are filled in document order with last-writer-wins semantics, so
//! when two records share a value the later record owns the entry. The
//! outcome is reproducible for byte-identical input.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A non-primary field usable for indexed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlternateKey {
    HyperlinkId,
    AttributeId,
    Name,
    UnitId,
}

impl AlternateKey {
    /// Number of alternate keys.
    pub const COUNT: usize = 4;

    /// All alternate keys.
    pub const ALL: [AlternateKey; Self::COUNT] = [
        AlternateKey::HyperlinkId,
        AlternateKey::AttributeId,
        AlternateKey::Name,
        AlternateKey::UnitId,
    ];

    /// JSON property the key is read from.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            AlternateKey::HyperlinkId => "hyperlinkId",
            AlternateKey::AttributeId => "attributeId",
            AlternateKey::Name => "name",
            AlternateKey::UnitId => "unitId",
        }
    }

    /// Key for a JSON property name.
    #[must_use]
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.field_name() == name)
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AlternateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Lookup table from alternate-key value to primary id.
#[derive(Debug, Clone, Default)]
pub struct IndexTable {
    key: Option<AlternateKey>,
    entries: IndexMap<String, String>,
    collisions: usize,
}

impl IndexTable {
    /// Build the table for `key` over the records of a document root.
    ///
    /// Records without the field (or with a non-string value) are left out.
    #[must_use]
    pub fn build(key: AlternateKey, records: &Map<String, Value>) -> Self {
        let field = key.field_name();
        let mut entries = IndexMap::new();
        let mut collisions = 0;

        for (id, record) in records {
            let Some(value) = record.get(field).and_then(Value::as_str) else {
                continue;
            };
            if let Some(previous) = entries.insert(value.to_string(), id.clone()) {
                collisions += 1;
                tracing::trace!(
                    "{} '{}' moved from '{}' to '{}'",
                    field,
                    value,
                    previous,
                    id
                );
            }
        }

        tracing::debug!(
            "Built {} index: {} entries, {} collisions",
            field,
            entries.len(),
            collisions
        );

        Self {
            key: Some(key),
            entries,
            collisions,
        }
    }

    /// The alternate key this table indexes.
    #[must_use]
    pub fn key(&self) -> Option<AlternateKey> {
        self.key
    }

    /// Primary id for an alternate-key value.
    #[must_use]
    pub fn get(&self, value: &str) -> Option<&str> {
        self.entries.get(value).map(String::as_str)
    }

    /// Whether a value is indexed.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains_key(value)
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many records lost their entry to a later record.
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Indexed values, in the order they were first seen.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(value, primary id)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::ops::Index<&str> for IndexTable {
    type Output = str;

    /// # Panics
    /// Panics if the value is not indexed.
    fn index(&self, value: &str) -> &str {
        &self.entries[value]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(json: &str) -> Map<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_field_is_omitted() {
        let map = records(r#"{ "A": { "name": "Foo" } }"#);
        let table = IndexTable::build(AlternateKey::HyperlinkId, &map);
        assert!(table.is_empty());
        assert_eq!(table.get("A"), None);
    }

    #[test]
    fn test_last_writer_wins_in_document_order() {
        let map = records(
            r#"{ "B": { "hyperlinkId": "X" }, "A": { "hyperlinkId": "X" }, "C": { "hyperlinkId": "Y" } }"#,
        );
        let table = IndexTable::build(AlternateKey::HyperlinkId, &map);
        assert_eq!(&table["X"], "A");
        assert_eq!(table.get("Y"), Some("C"));
        assert_eq!(table.collisions(), 1);
        assert_eq!(table.values().collect::<Vec<_>>(), vec!["X", "Y"]);
    }

    #[test]
    fn test_non_string_values_skipped() {
        let map = records(r#"{ "A": { "name": 7 }, "B": { "name": "Bee" } }"#);
        let table = IndexTable::build(AlternateKey::Name, &map);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Bee"), Some("B"));
    }

    #[test]
    fn test_field_names() {
        for key in AlternateKey::ALL {
            assert_eq!(AlternateKey::from_field_name(key.field_name()), Some(key));
        }
        assert_eq!(AlternateKey::from_field_name("id"), None);
    }
}
