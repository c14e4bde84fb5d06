use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::document::AlternateKey;

pub mod execute;
pub mod get;
pub mod list;
pub mod strings;

/// Kind of data document being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Hero,
    Unit,
    Announcer,
    Banner,
    Boost,
    Bundle,
    Emoticon,
    EmoticonPack,
    LootChest,
    Matchaward,
    Mount,
    PortraitPack,
    RewardPortrait,
    HeroSkin,
    Spray,
    TypeDescription,
    VoiceLine,
}

/// Key a record is looked up by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KeyArg {
    /// Primary id (the document property name)
    #[default]
    Id,
    HyperlinkId,
    AttributeId,
    Name,
    UnitId,
}

impl KeyArg {
    /// The alternate key, or `None` for the primary id.
    #[must_use]
    pub fn alternate(self) -> Option<AlternateKey> {
        match self {
            KeyArg::Id => None,
            KeyArg::HyperlinkId => Some(AlternateKey::HyperlinkId),
            KeyArg::AttributeId => Some(AlternateKey::AttributeId),
            KeyArg::Name => Some(AlternateKey::Name),
            KeyArg::UnitId => Some(AlternateKey::UnitId),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one record and print it as JSON
    Get {
        /// Kind of records in the data document
        #[arg(value_enum)]
        kind: EntityKind,

        /// Data document (e.g. herodata_87306_enus.json)
        data: PathBuf,

        /// Key to look up
        key: String,

        /// Which key to look up by
        #[arg(long, value_enum, default_value_t = KeyArg::Id)]
        by: KeyArg,

        /// Skip abilities, talents and hero units
        #[arg(long)]
        minimal: bool,
    },

    /// List record ids in document order
    List {
        /// Kind of records in the data document
        #[arg(value_enum)]
        kind: EntityKind,

        /// Data document
        data: PathBuf,
    },

    /// Print one localized text fragment
    Strings {
        /// Game strings document (e.g. gamestrings_87306_kokr.json)
        source: PathBuf,

        /// Category (e.g. unit, abiltalent)
        category: String,

        /// Field name (e.g. name, full)
        field: String,

        /// Entity id or canonical identity key
        key: String,
    },
}
