//! Data documents: indexed, typed lookup over game data records
//!
//! A data document is a JSON object whose properties are records keyed by
//! their primary id:
//!
//! ```json
//! {
//!   "Abathur": { "hyperlinkId": "Abathur", "attributeId": "Abat", "name": "Abathur", ... },
//!   "Alarak":  { ... }
//! }
//! ```
//!
//! [`DataDocument`] looks records up by primary id or by an alternate key
//! (hyperlink id, attribute id, name, unit id), materializes them into their
//! model type and, when a [`GameStringDocument`] is attached, overlays the
//! localized text before returning them.
//!
//! # Lookup forms
//!
//! Every key has a throwing and a non-throwing accessor that share one core
//! lookup: `get_by_*` returns [`Error::NotFound`] on a miss, `try_get_by_*`
//! returns `Ok(None)`. Both fail with [`Error::EmptyArgument`] for an empty
//! key before anything is looked up.
//!
//! # Threading
//!
//! Alternate-key index tables are built lazily, once per key, on first use.
//! The cache is not synchronized, so a document is `Send` but not `Sync`:
//! one owner at a time.

mod entity;
mod index;
mod reader;

use std::cell::OnceCell;
use std::marker::PhantomData;

use serde_json::{Map, Value};

pub use entity::{AssembleOptions, Entity};
pub use index::{AlternateKey, IndexTable};

use crate::error::{Error, Result, require_key};
use crate::localization::GameStringDocument;
use crate::models::{
    Announcer, Banner, Boost, Bundle, Emoticon, EmoticonPack, Hero, HeroSkin, LootChest,
    Matchaward, Mount, PortraitPack, RewardPortrait, Spray, TypeDescription, Unit, VoiceLine,
};
use crate::view::NodeView;

/// Reader for hero documents.
pub type HeroDataDocument = DataDocument<Hero>;
/// Reader for unit documents.
pub type UnitDataDocument = DataDocument<Unit>;
/// Reader for announcer documents.
pub type AnnouncerDataDocument = DataDocument<Announcer>;
/// Reader for banner documents.
pub type BannerDataDocument = DataDocument<Banner>;
/// Reader for boost documents.
pub type BoostDataDocument = DataDocument<Boost>;
/// Reader for bundle documents.
pub type BundleDataDocument = DataDocument<Bundle>;
/// Reader for emoticon documents.
pub type EmoticonDataDocument = DataDocument<Emoticon>;
/// Reader for emoticon pack documents.
pub type EmoticonPackDataDocument = DataDocument<EmoticonPack>;
/// Reader for loot chest documents.
pub type LootChestDataDocument = DataDocument<LootChest>;
/// Reader for match award documents.
pub type MatchawardDataDocument = DataDocument<Matchaward>;
/// Reader for mount documents.
pub type MountDataDocument = DataDocument<Mount>;
/// Reader for portrait pack documents.
pub type PortraitPackDataDocument = DataDocument<PortraitPack>;
/// Reader for reward portrait documents.
pub type RewardPortraitDataDocument = DataDocument<RewardPortrait>;
/// Reader for hero skin documents.
pub type HeroSkinDataDocument = DataDocument<HeroSkin>;
/// Reader for spray documents.
pub type SprayDataDocument = DataDocument<Spray>;
/// Reader for type description documents.
pub type TypeDescriptionDataDocument = DataDocument<TypeDescription>;
/// Reader for voice line documents.
pub type VoiceLineDataDocument = DataDocument<VoiceLine>;

/// Typed, indexed view over one data document.
pub struct DataDocument<T: Entity> {
    /// Records keyed by primary id; `None` once closed.
    records: Option<Map<String, Value>>,
    /// One lazily built table per alternate key.
    indexes: [OnceCell<IndexTable>; AlternateKey::COUNT],
    game_strings: Option<GameStringDocument>,
    options: AssembleOptions,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> DataDocument<T> {
    /// Create a document from an already parsed JSON value.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDocumentRoot`] if the root is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(records) = value else {
            return Err(Error::InvalidDocumentRoot {
                expected: "an object of records keyed by id",
            });
        };

        tracing::info!("Loaded {} document with {} records", T::KIND, records.len());

        Ok(Self {
            records: Some(records),
            indexes: Default::default(),
            game_strings: None,
            options: AssembleOptions::default(),
            _entity: PhantomData,
        })
    }

    /// Attach a game strings document; every entity returned afterwards is
    /// overlaid with it.
    #[must_use]
    pub fn with_game_strings(mut self, game_strings: GameStringDocument) -> Self {
        self.game_strings = Some(game_strings);
        self
    }

    /// Set the assemble options.
    #[must_use]
    pub fn with_options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace or remove the attached game strings document.
    pub fn set_game_strings(&mut self, game_strings: Option<GameStringDocument>) {
        self.game_strings = game_strings;
    }

    /// The attached game strings document.
    #[must_use]
    pub fn game_strings(&self) -> Option<&GameStringDocument> {
        self.game_strings.as_ref()
    }

    /// The assemble options.
    #[must_use]
    pub fn options(&self) -> &AssembleOptions {
        &self.options
    }

    /// Release the underlying tree and cached indexes.
    ///
    /// Safe to call more than once. Lookups on a closed document fail with
    /// [`Error::DocumentClosed`].
    pub fn close(&mut self) {
        if self.records.take().is_some() {
            tracing::debug!("Closed {} document", T::KIND);
        }
        for index in &mut self.indexes {
            index.take();
        }
        self.game_strings = None;
    }

    /// Whether [`DataDocument::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.records.is_none()
    }

    /// Number of records (0 once closed).
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.as_ref().map_or(0, Map::len)
    }

    /// Primary ids in document order (none once closed).
    pub fn all_ids(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .flat_map(|records| records.keys().map(String::as_str))
    }

    /// Whether a record with this primary id exists.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.records
            .as_ref()
            .is_some_and(|records| records.contains_key(id))
    }

    // -------------------------------------------------------------------------
    // Indexes
    // -------------------------------------------------------------------------

    /// The index table for an alternate key, built on first request.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedAlternateKey`] if this entity kind is not
    /// indexed by `key`, or [`Error::DocumentClosed`].
    pub fn index_by(&self, key: AlternateKey) -> Result<&IndexTable> {
        if !T::ALTERNATE_KEYS.contains(&key) {
            return Err(Error::UnsupportedAlternateKey {
                kind: T::KIND,
                key: key.field_name(),
            });
        }
        let records = self.records()?;
        Ok(self.indexes[key.slot()].get_or_init(|| IndexTable::build(key, records)))
    }

    /// Primary id of the record an alternate-key value points at.
    ///
    /// # Errors
    /// Returns [`Error::EmptyArgument`] for an empty value, otherwise the
    /// errors of [`DataDocument::index_by`].
    pub fn lookup_by_alternate_key(&self, key: AlternateKey, value: &str) -> Result<Option<&str>> {
        let value = require_key(value, key.field_name())?;
        Ok(self.index_by(key)?.get(value))
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// Entity by primary id.
    ///
    /// # Errors
    /// Returns [`Error::EmptyArgument`], [`Error::NotFound`],
    /// [`Error::InvalidRecord`] or [`Error::DocumentClosed`].
    pub fn get_by_id(&self, id: &str) -> Result<T> {
        self.try_get_by_id(id)?.ok_or_else(|| not_found::<T>("id", id))
    }

    /// Entity by primary id; `Ok(None)` when absent.
    ///
    /// # Errors
    /// Returns [`Error::EmptyArgument`], [`Error::InvalidRecord`] or
    /// [`Error::DocumentClosed`].
    pub fn try_get_by_id(&self, id: &str) -> Result<Option<T>> {
        let id = require_key(id, "id")?;
        self.find(id)
    }

    /// Entity by an alternate key.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] on a miss, plus the errors of
    /// [`DataDocument::try_get_by`].
    pub fn get_by(&self, key: AlternateKey, value: &str) -> Result<T> {
        self.try_get_by(key, value)?
            .ok_or_else(|| not_found::<T>(key.field_name(), value))
    }

    /// Entity by an alternate key; `Ok(None)` when no record has the value.
    ///
    /// # Errors
    /// Returns [`Error::EmptyArgument`], [`Error::UnsupportedAlternateKey`],
    /// [`Error::InvalidRecord`] or [`Error::DocumentClosed`].
    pub fn try_get_by(&self, key: AlternateKey, value: &str) -> Result<Option<T>> {
        match self.lookup_by_alternate_key(key, value)? {
            Some(id) => self.find(id),
            None => Ok(None),
        }
    }

    pub fn get_by_hyperlink_id(&self, hyperlink_id: &str) -> Result<T> {
        self.get_by(AlternateKey::HyperlinkId, hyperlink_id)
    }

    pub fn try_get_by_hyperlink_id(&self, hyperlink_id: &str) -> Result<Option<T>> {
        self.try_get_by(AlternateKey::HyperlinkId, hyperlink_id)
    }

    pub fn get_by_attribute_id(&self, attribute_id: &str) -> Result<T> {
        self.get_by(AlternateKey::AttributeId, attribute_id)
    }

    pub fn try_get_by_attribute_id(&self, attribute_id: &str) -> Result<Option<T>> {
        self.try_get_by(AlternateKey::AttributeId, attribute_id)
    }

    pub fn get_by_name(&self, name: &str) -> Result<T> {
        self.get_by(AlternateKey::Name, name)
    }

    pub fn try_get_by_name(&self, name: &str) -> Result<Option<T>> {
        self.try_get_by(AlternateKey::Name, name)
    }

    pub fn get_by_unit_id(&self, unit_id: &str) -> Result<T> {
        self.get_by(AlternateKey::UnitId, unit_id)
    }

    pub fn try_get_by_unit_id(&self, unit_id: &str) -> Result<Option<T>> {
        self.try_get_by(AlternateKey::UnitId, unit_id)
    }

    /// Every entity, in document order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRecord`] or [`Error::DocumentClosed`].
    pub fn all(&self) -> Result<Vec<T>> {
        self.records()?
            .iter()
            .map(|(id, record)| self.materialize(id, record))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn records(&self) -> Result<&Map<String, Value>> {
        self.records.as_ref().ok_or(Error::DocumentClosed)
    }

    fn find(&self, id: &str) -> Result<Option<T>> {
        match self.records()?.get(id) {
            Some(record) => self.materialize(id, record).map(Some),
            None => Ok(None),
        }
    }

    fn materialize(&self, id: &str, record: &Value) -> Result<T> {
        if !record.is_object() {
            return Err(Error::InvalidRecord { id: id.to_string() });
        }

        let mut entity = T::from_record(id, NodeView::new(record), &self.options);
        if let Some(strings) = &self.game_strings {
            entity.localize(strings);
        }
        Ok(entity)
    }
}

impl<T: Entity> std::fmt::Debug for DataDocument<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataDocument")
            .field("kind", &T::KIND)
            .field("count", &self.count())
            .field("closed", &self.is_closed())
            .field("localized", &self.game_strings.is_some())
            .finish_non_exhaustive()
    }
}

fn not_found<T: Entity>(key_kind: &'static str, key: &str) -> Error {
    Error::NotFound {
        kind: T::KIND,
        key_kind,
        key: key.to_string(),
    }
}
