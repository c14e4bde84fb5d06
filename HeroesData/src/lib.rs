#![allow(non_snake_case)]
//! # HeroesData
//!
//! A pure-Rust library for reading Heroes of the Storm game data documents.
//!
//! ## Features
//!
//! - **Indexed lookup** - records by primary id, hyperlink id, attribute id,
//!   name or unit id, with lazily built index tables
//! - **Ability/talent assembly** - tiered abilities, sub-abilities linked to
//!   their parent by identity key, talents by row
//! - **Localization overlay** - game strings spliced into assembled entities
//!
//! ## Quick Start
//!
//! ### Looking up a hero
//!
//! ```no_run
//! use heroesdata::prelude::*;
//!
//! let heroes = HeroDataDocument::from_path("herodata_87306_enus.json")?;
//! let abathur = heroes.get_by_id("Abathur")?;
//! println!("{} has {} talents", abathur.id(), abathur.talents.len());
//!
//! if let Some(hero) = heroes.try_get_by_attribute_id("Abat")? {
//!     println!("{:?}", hero.name());
//! }
//! # Ok::<(), heroesdata::Error>(())
//! ```
//!
//! ### Localizing
//!
//! ```no_run
//! use heroesdata::prelude::*;
//!
//! let strings = GameStringDocument::from_path("gamestrings_87306_kokr.json", None)?;
//! let heroes = HeroDataDocument::from_path("herodata_87306_kokr.json")?
//!     .with_game_strings(strings);
//! let abathur = heroes.get_by_id("Abathur")?;
//! # Ok::<(), heroesdata::Error>(())
//! ```
//!
//! ## Threading
//!
//! Documents build their index tables on first use without synchronization,
//! so they are `Send` but not `Sync`.
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `heroesdata` command-line binary

pub mod error;
pub mod view;
pub mod identity;
pub mod locale;
pub mod models;
pub mod assemble;
pub mod document;
pub mod localization;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::identity::{AbilityKind, IdentityKey};
    pub use crate::locale::{Localization, resolve_locale};
    pub use crate::view::NodeView;

    // Documents
    pub use crate::document::{
        AlternateKey, AssembleOptions, DataDocument, Entity, IndexTable,
        AnnouncerDataDocument, BannerDataDocument, BoostDataDocument, BundleDataDocument,
        EmoticonDataDocument, EmoticonPackDataDocument, HeroDataDocument,
        HeroSkinDataDocument, LootChestDataDocument, MatchawardDataDocument,
        MountDataDocument, PortraitPackDataDocument, RewardPortraitDataDocument,
        SprayDataDocument, TypeDescriptionDataDocument, UnitDataDocument,
        VoiceLineDataDocument,
    };

    // Localization
    pub use crate::localization::{GameStringDocument, Localize};

    // Models
    pub use crate::models::{
        Ability, AbilityTalentTooltip, AbilityTier, Announcer, Banner, Boost, Bundle,
        CollectionInfo, Emoticon, EmoticonPack, Hero, HeroSkin, LootChest, Matchaward, Mount,
        PortraitPack, Rarity, RewardPortrait, Spray, Talent, TalentTier, TooltipCharges,
        TooltipDescription, TypeDescription, Unit, VoiceLine,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
