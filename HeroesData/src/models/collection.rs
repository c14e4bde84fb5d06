//! Collection entities: cosmetics, rewards and store items
//!
//! Every collection entity carries a primary id and a [`CollectionInfo`]
//! core; the structs below add the fields specific to each kind.

use indexmap::IndexMap;
use serde::Serialize;

use super::common::CollectionInfo;
use super::tooltip::TooltipDescription;

/// Announcer pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Announcer {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub gender: Option<String>,
    /// Hero the announcer is voiced by.
    pub hero_id: Option<String>,
    pub image: Option<String>,
}

/// Banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Banner {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
}

/// Boost (stimpack).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Boost {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
}

/// Store bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bundle {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub hero_ids: Vec<String>,
    /// Skin ids per hero id, in source order.
    pub hero_skins: IndexMap<String, Vec<String>>,
    pub mount_ids: Vec<String>,
    pub boost_bonus_id: Option<String>,
    pub gold_bonus: Option<i64>,
    pub gems_bonus: Option<i64>,
    pub is_dynamic_content: bool,
    pub image: Option<String>,
}

/// Chat emoticon.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Emoticon {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    /// Chat text that produces the emoticon, e.g. ":abatcry:".
    pub expression: Option<String>,
    pub search_text: Option<String>,
    pub aliases: Vec<String>,
    pub hero_id: Option<String>,
    pub hero_skin_id: Option<String>,
    pub image: Option<String>,
    pub is_hidden: bool,
}

/// Emoticon pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmoticonPack {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub emoticon_ids: Vec<String>,
}

/// Loot chest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LootChest {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub max_rerolls: Option<i64>,
    pub type_description_id: Option<String>,
}

/// End-of-match award.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Matchaward {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    /// Score screen tag.
    pub tag: Option<String>,
    pub mvp_screen_image: Option<String>,
    pub score_screen_image: Option<String>,
}

/// Mount.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mount {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub info_text: Option<TooltipDescription>,
    pub search_text: Option<String>,
    pub franchise: Option<String>,
    pub mount_category: Option<String>,
    pub variation_mount_ids: Vec<String>,
}

/// Portrait pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortraitPack {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub reward_portrait_ids: Vec<String>,
}

/// Reward portrait.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RewardPortrait {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    /// Description shown while the portrait is still locked.
    pub description_unearned: Option<TooltipDescription>,
    pub hero_id: Option<String>,
    pub icon_slot: Option<i64>,
    pub portrait_pack_id: Option<String>,
    pub texture_sheet: Option<String>,
}

/// Hero skin.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroSkin {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub info_text: Option<TooltipDescription>,
    pub search_text: Option<String>,
    pub franchise: Option<String>,
    pub features: Vec<String>,
    pub variation_skin_ids: Vec<String>,
}

/// Spray.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Spray {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub search_text: Option<String>,
    pub image: Option<String>,
    pub is_animated: bool,
}

/// Item type description (icon and label for a collection category).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeDescription {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub icon_slot: Option<i64>,
    pub texture_sheet: Option<String>,
    pub large_image: Option<String>,
}

/// Voice line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VoiceLine {
    pub id: String,
    #[serde(flatten)]
    pub info: CollectionInfo,
    pub image: Option<String>,
}
