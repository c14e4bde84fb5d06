//! Read-only view over a parsed JSON tree
//!
//! Game data documents are plain JSON objects whose properties are either
//! scalar fields, nested objects, or named arrays ("tier" slots). A
//! [`NodeView`] wraps one node of that tree and offers typed accessors that
//! treat an absent or mistyped property as "not present" instead of failing.
//!
//! Object properties are visited in document order (`serde_json` is built
//! with `preserve_order`), and array elements in source order.

use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Date format used by `releaseDate` fields.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A borrowed, navigable node of a JSON document.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    value: &'a Value,
}

impl<'a> NodeView<'a> {
    /// Wrap a JSON value.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The underlying JSON value.
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The node as an object, if it is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&'a Map<String, Value>> {
        self.value.as_object()
    }

    /// The node as a string, if it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    /// Whether this node is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    /// Named child of an object node.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeView<'a>> {
        self.value.get(name).map(NodeView::new)
    }

    /// Whether the object node has a property with this name.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.value.get(name).is_some()
    }

    /// Walk a chain of property names.
    #[must_use]
    pub fn path(&self, names: &[&str]) -> Option<NodeView<'a>> {
        names
            .iter()
            .try_fold(*self, |node, name| node.get(name))
    }

    /// String property, borrowed.
    #[must_use]
    pub fn str(&self, name: &str) -> Option<&'a str> {
        self.value.get(name).and_then(Value::as_str)
    }

    /// String property, owned.
    #[must_use]
    pub fn string(&self, name: &str) -> Option<String> {
        self.str(name).map(str::to_owned)
    }

    /// Numeric property as `f64` (integers are widened).
    #[must_use]
    pub fn f64(&self, name: &str) -> Option<f64> {
        self.value.get(name).and_then(Value::as_f64)
    }

    /// Integer property.
    #[must_use]
    pub fn i64(&self, name: &str) -> Option<i64> {
        self.value.get(name).and_then(Value::as_i64)
    }

    /// Non-negative integer property that fits in `u32`.
    #[must_use]
    pub fn u32(&self, name: &str) -> Option<u32> {
        self.value
            .get(name)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    }

    /// Boolean property.
    #[must_use]
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.value.get(name).and_then(Value::as_bool)
    }

    /// Date property in `YYYY-MM-DD` form; unparsable dates read as absent.
    #[must_use]
    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.str(name)
            .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
    }

    /// Elements of a named array in source order. Empty when absent.
    pub fn array(&self, name: &str) -> impl Iterator<Item = NodeView<'a>> + use<'a> {
        self.value
            .get(name)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(NodeView::new)
    }

    /// String elements of a named array; non-string elements are skipped.
    #[must_use]
    pub fn strings(&self, name: &str) -> Vec<String> {
        self.array(name)
            .filter_map(|node| node.as_str().map(str::to_owned))
            .collect()
    }

    /// Properties of an object node in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, NodeView<'a>)> + use<'a> {
        self.value
            .as_object()
            .into_iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), NodeView::new(value)))
    }
}

impl<'a> From<&'a Value> for NodeView<'a> {
    fn from(value: &'a Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_accessors() {
        let value = json!({
            "name": "Abathur",
            "speed": 4.3984,
            "sight": 12,
            "isActive": true,
            "releaseDate": "2014-03-13",
        });
        let node = NodeView::new(&value);

        assert_eq!(node.str("name"), Some("Abathur"));
        assert_eq!(node.f64("sight"), Some(12.0));
        assert_eq!(node.u32("sight"), Some(12));
        assert_eq!(node.bool("isActive"), Some(true));
        assert_eq!(node.date("releaseDate"), NaiveDate::from_ymd_opt(2014, 3, 13));
    }

    #[test]
    fn test_absent_and_mistyped_fields() {
        let value = json!({ "name": 5, "releaseDate": "soon" });
        let node = NodeView::new(&value);

        assert_eq!(node.str("name"), None);
        assert_eq!(node.str("missing"), None);
        assert_eq!(node.date("releaseDate"), None);
        assert_eq!(node.array("missing").count(), 0);
    }

    #[test]
    fn test_entries_follow_document_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = NodeView::new(&value).entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_path_and_strings() {
        let value = json!({ "meta": { "locale": "kokr" }, "roles": ["Support", 3, "Healer"] });
        let node = NodeView::new(&value);

        assert_eq!(node.path(&["meta", "locale"]).and_then(|n| n.as_str()), Some("kokr"));
        assert!(node.path(&["meta", "version"]).is_none());
        assert_eq!(node.strings("roles"), vec!["Support", "Healer"]);
    }
}
