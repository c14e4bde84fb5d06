//! Game strings document

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::locale::{Localization, resolve_locale};
use crate::view::NodeView;

/// Property holding the `category -> field -> key -> text` tree.
pub const GAMESTRINGS_FIELD: &str = "gamestrings";

/// A parsed game strings document for one locale.
///
/// Fragments are not copied out of the tree; every [`GameStringDocument::text`]
/// call walks `gamestrings.<category>.<field>.<key>` again.
#[derive(Debug, Clone)]
pub struct GameStringDocument {
    root: Value,
    locale: Localization,
    source: Option<PathBuf>,
}

impl GameStringDocument {
    /// Read a game strings document from disk.
    ///
    /// Without an explicit locale, `meta.locale` is used, then the file name
    /// suffix (`gamestrings_87306_kokr.json`), then the fallback.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or its
    /// root is not an object.
    pub fn from_path<P: AsRef<Path>>(path: P, locale: Option<Localization>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading game strings {}", path.display());
        let data = fs::read(path)?;
        let value: Value = serde_json::from_slice(&data)?;

        let mut document = Self::build(value, locale, Some(path))?;
        document.source = Some(path.to_path_buf());
        Ok(document)
    }

    /// Parse a game strings document from UTF-8 JSON bytes.
    ///
    /// # Errors
    /// Returns an error if the bytes are not valid JSON or the root is not an
    /// object.
    pub fn from_bytes(data: &[u8], locale: Option<Localization>) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value(value, locale)
    }

    /// Parse a game strings document from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the string is not valid JSON or the root is not an
    /// object.
    pub fn from_json(content: &str, locale: Option<Localization>) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value, locale)
    }

    /// Parse a game strings document from a reader.
    ///
    /// # Errors
    /// Returns an error if reading fails, the data is not valid JSON, or the
    /// root is not an object.
    pub fn from_reader<R: Read>(reader: R, locale: Option<Localization>) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value, locale)
    }

    /// Wrap an already parsed JSON value.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDocumentRoot`] if the root is not an object.
    pub fn from_value(value: Value, locale: Option<Localization>) -> Result<Self> {
        Self::build(value, locale, None)
    }

    fn build(value: Value, locale: Option<Localization>, file_name: Option<&Path>) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidDocumentRoot {
                expected: "an object with a 'gamestrings' property",
            });
        }

        let meta_locale = value
            .get("meta")
            .and_then(|meta| meta.get("locale"))
            .and_then(Value::as_str);
        let locale = resolve_locale(locale, meta_locale, file_name);

        let document = Self {
            root: value,
            locale,
            source: None,
        };
        tracing::info!(
            "Loaded game strings ({}) with {} categories",
            document.locale,
            document.category_count()
        );
        Ok(document)
    }

    /// Locale of the text in this document.
    #[must_use]
    pub fn locale(&self) -> Localization {
        self.locale
    }

    /// Game build the strings were extracted from (`meta.version`).
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root
            .get("meta")
            .and_then(|meta| meta.get("version"))
            .and_then(Value::as_str)
    }

    /// File the document was read from.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Text fragment at `gamestrings.<category>.<field>.<key>`.
    #[must_use]
    pub fn text(&self, category: &str, field: &str, key: &str) -> Option<&str> {
        self.strings()?
            .path(&[category, field])?
            .str(key)
    }

    /// Number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories().count()
    }

    /// Category names in document order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.strings()
            .into_iter()
            .flat_map(|strings| strings.entries().map(|(name, _)| name))
    }

    /// Field names of one category in document order.
    pub fn fields<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.strings()
            .and_then(|strings| strings.get(category))
            .into_iter()
            .flat_map(|fields| fields.entries().map(|(name, _)| name))
    }

    fn strings(&self) -> Option<NodeView<'_>> {
        NodeView::new(&self.root).get(GAMESTRINGS_FIELD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "meta": { "locale": "dede", "version": "2.55.0.87306" },
            "gamestrings": {
                "unit": { "name": { "Abathur": "Abathur (DE)" }, "title": { "Abathur": "Evolutionsmeister" } },
                "abiltalent": { "name": { "A|A|Q|False": "Symbiont" } }
            }
        })
    }

    #[test]
    fn test_text_lookup() {
        let strings = GameStringDocument::from_value(sample(), None).unwrap();
        assert_eq!(strings.text("unit", "name", "Abathur"), Some("Abathur (DE)"));
        assert_eq!(strings.text("abiltalent", "name", "A|A|Q|False"), Some("Symbiont"));
        assert_eq!(strings.text("unit", "name", "Zagara"), None);
        assert_eq!(strings.text("mount", "name", "Abathur"), None);
    }

    #[test]
    fn test_meta() {
        let strings = GameStringDocument::from_value(sample(), None).unwrap();
        assert_eq!(strings.locale(), Localization::DeDe);
        assert_eq!(strings.version(), Some("2.55.0.87306"));
        assert_eq!(strings.category_count(), 2);
        assert_eq!(strings.fields("unit").collect::<Vec<_>>(), vec!["name", "title"]);
        assert!(strings.source().is_none());
    }

    #[test]
    fn test_explicit_locale_wins() {
        let strings = GameStringDocument::from_value(sample(), Some(Localization::RuRu)).unwrap();
        assert_eq!(strings.locale(), Localization::RuRu);
    }

    #[test]
    fn test_missing_gamestrings_is_empty() {
        let strings = GameStringDocument::from_json("{}", None).unwrap();
        assert_eq!(strings.locale(), Localization::FALLBACK);
        assert_eq!(strings.category_count(), 0);
        assert_eq!(strings.text("unit", "name", "Abathur"), None);
    }

    #[test]
    fn test_root_must_be_object() {
        let err = GameStringDocument::from_json("[1, 2]", None).unwrap_err();
        assert!(matches!(err, Error::InvalidDocumentRoot { .. }));
    }
}
