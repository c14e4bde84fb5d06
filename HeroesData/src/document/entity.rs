//! The entity abstraction shared by all data document readers

use super::index::AlternateKey;
use crate::locale::Localization;
use crate::localization::Localize;
use crate::view::NodeView;

/// Controls which nested structures are materialized for an entity.
///
/// Everything is assembled by default. Skipping parts a caller does not need
/// (e.g. talents when only listing hero names) avoids building them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Assemble tiered abilities.
    pub abilities: bool,
    /// Assemble sub-abilities.
    pub sub_abilities: bool,
    /// Assemble talents (heroes only).
    pub talents: bool,
    /// Assemble hero units (heroes only).
    pub hero_units: bool,
    /// Locale attached to rich text read from the data document itself.
    pub locale: Localization,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            abilities: true,
            sub_abilities: true,
            talents: true,
            hero_units: true,
            locale: Localization::FALLBACK,
        }
    }
}

impl AssembleOptions {
    /// Options that assemble only the entity's own scalar fields.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            abilities: false,
            sub_abilities: false,
            talents: false,
            hero_units: false,
            ..Self::default()
        }
    }

    pub fn with_abilities(mut self, enabled: bool) -> Self {
        self.abilities = enabled;
        self
    }

    pub fn with_sub_abilities(mut self, enabled: bool) -> Self {
        self.sub_abilities = enabled;
        self
    }

    pub fn with_talents(mut self, enabled: bool) -> Self {
        self.talents = enabled;
        self
    }

    pub fn with_hero_units(mut self, enabled: bool) -> Self {
        self.hero_units = enabled;
        self
    }

    pub fn with_locale(mut self, locale: Localization) -> Self {
        self.locale = locale;
        self
    }
}

/// A kind of record stored in a data document.
///
/// Implementors describe how one record is materialized and which alternate
/// keys it can be looked up by.
pub trait Entity: Localize + Sized {
    /// Entity kind name used in errors and logs (e.g., "hero").
    const KIND: &'static str;

    /// Alternate keys this kind can be indexed by.
    const ALTERNATE_KEYS: &'static [AlternateKey];

    /// Materialize the record stored under `id`.
    ///
    /// Absent optional fields are never an error.
    fn from_record(id: &str, record: NodeView<'_>, options: &AssembleOptions) -> Self;

    /// Primary id of the entity.
    fn id(&self) -> &str;
}
