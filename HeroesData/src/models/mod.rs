//! Typed entity models
//!
//! These types are the materialized form of records read from game data
//! documents. Optional source fields map to `Option` fields that stay `None`
//! when the source omits them; arrays map to `Vec`s that stay empty.

mod ability;
mod collection;
mod common;
mod hero;
mod talent;
mod tier;
mod tooltip;
mod unit;

pub use ability::Ability;
pub use collection::{
    Announcer, Banner, Boost, Bundle, Emoticon, EmoticonPack, HeroSkin, LootChest, Matchaward,
    Mount, PortraitPack, RewardPortrait, Spray, TypeDescription, VoiceLine,
};
pub use common::{CollectionInfo, Rarity};
pub use hero::{Hero, HeroPortraits, HeroRatings};
pub use talent::Talent;
pub use tier::{AbilityTier, TalentTier};
pub use tooltip::{AbilityTalentTooltip, TooltipCharges, TooltipDescription};
pub use unit::{UnitArmor, Unit, UnitEnergy, UnitLife, UnitShield, UnitWeapon, WeaponAttributeFactor};
