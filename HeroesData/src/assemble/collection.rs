//! Collection records
//!
//! Every collection kind shares the [`CollectionInfo`] core and is indexed by
//! hyperlink id, attribute id and name. The per-kind builders below read the
//! remaining fields.

use indexmap::IndexMap;

use crate::document::{AlternateKey, AssembleOptions, Entity};
use crate::locale::Localization;
use crate::models::{
    Announcer, Banner, Boost, Bundle, CollectionInfo, Emoticon, EmoticonPack, HeroSkin, LootChest,
    Matchaward, Mount, PortraitPack, RewardPortrait, Rarity, Spray, TooltipDescription,
    TypeDescription, VoiceLine,
};
use crate::view::NodeView;

const COLLECTION_KEYS: &[AlternateKey] = &[
    AlternateKey::HyperlinkId,
    AlternateKey::AttributeId,
    AlternateKey::Name,
];

macro_rules! collection_entity {
    ($ty:ty, $kind:literal, $build:ident) => {
        impl Entity for $ty {
            const KIND: &'static str = $kind;
            const ALTERNATE_KEYS: &'static [AlternateKey] = COLLECTION_KEYS;

            fn from_record(id: &str, record: NodeView<'_>, options: &AssembleOptions) -> Self {
                tracing::trace!("Assembling {} {}", $kind, id);
                $build(id, record, options.locale)
            }

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

collection_entity!(Announcer, "announcer", build_announcer);
collection_entity!(Banner, "banner", build_banner);
collection_entity!(Boost, "boost", build_boost);
collection_entity!(Bundle, "bundle", build_bundle);
collection_entity!(Emoticon, "emoticon", build_emoticon);
collection_entity!(EmoticonPack, "emoticon pack", build_emoticon_pack);
collection_entity!(LootChest, "loot chest", build_loot_chest);
collection_entity!(Matchaward, "match award", build_matchaward);
collection_entity!(Mount, "mount", build_mount);
collection_entity!(PortraitPack, "portrait pack", build_portrait_pack);
collection_entity!(RewardPortrait, "reward portrait", build_reward_portrait);
collection_entity!(HeroSkin, "hero skin", build_hero_skin);
collection_entity!(Spray, "spray", build_spray);
collection_entity!(TypeDescription, "type description", build_type_description);
collection_entity!(VoiceLine, "voice line", build_voice_line);

/// Core fields shared by every collection kind.
fn build_info(record: NodeView<'_>, locale: Localization) -> CollectionInfo {
    CollectionInfo {
        hyperlink_id: record.string("hyperlinkId"),
        attribute_id: record.string("attributeId"),
        name: record.string("name"),
        sort_name: record.string("sortName"),
        description: rich_text(record, "description", locale),
        rarity: record.str("rarity").map(Rarity::parse),
        release_date: record.date("releaseDate"),
        event: record.string("event"),
        collection_category: record.string("category"),
    }
}

fn rich_text(record: NodeView<'_>, name: &str, locale: Localization) -> Option<TooltipDescription> {
    record
        .str(name)
        .map(|text| TooltipDescription::new(text, locale))
}

/// `"textureSheet": { "image": "..." }`
fn texture_sheet(record: NodeView<'_>) -> Option<String> {
    record.get("textureSheet").and_then(|sheet| sheet.string("image"))
}

fn build_announcer(id: &str, record: NodeView<'_>, locale: Localization) -> Announcer {
    Announcer {
        id: id.to_string(),
        info: build_info(record, locale),
        gender: record.string("gender"),
        hero_id: record.string("heroId"),
        image: record.string("image"),
    }
}

fn build_banner(id: &str, record: NodeView<'_>, locale: Localization) -> Banner {
    Banner {
        id: id.to_string(),
        info: build_info(record, locale),
    }
}

fn build_boost(id: &str, record: NodeView<'_>, locale: Localization) -> Boost {
    Boost {
        id: id.to_string(),
        info: build_info(record, locale),
    }
}

/// `"heroSkins": { "Abathur": ["AbathurBone", ...], ... }`
fn build_bundle(id: &str, record: NodeView<'_>, locale: Localization) -> Bundle {
    let hero_skins: IndexMap<String, Vec<String>> = record
        .get("heroSkins")
        .map(|skins| {
            skins
                .entries()
                .map(|(hero_id, ids)| {
                    let ids = ids
                        .value()
                        .as_array()
                        .into_iter()
                        .flatten()
                        .filter_map(|id| id.as_str().map(str::to_owned))
                        .collect();
                    (hero_id.to_string(), ids)
                })
                .collect()
        })
        .unwrap_or_default();

    Bundle {
        id: id.to_string(),
        info: build_info(record, locale),
        hero_ids: record.strings("heroIds"),
        hero_skins,
        mount_ids: record.strings("mountIds"),
        boost_bonus_id: record.string("boostBonusId"),
        gold_bonus: record.i64("goldBonus"),
        gems_bonus: record.i64("gemsBonus"),
        is_dynamic_content: record.bool("isDynamicContent").unwrap_or(false),
        image: record.string("image"),
    }
}

fn build_emoticon(id: &str, record: NodeView<'_>, locale: Localization) -> Emoticon {
    Emoticon {
        id: id.to_string(),
        info: build_info(record, locale),
        expression: record.string("expression"),
        search_text: record.string("searchText"),
        aliases: record.strings("aliases"),
        hero_id: record.string("heroId"),
        hero_skin_id: record.string("heroSkinId"),
        image: record.string("image"),
        is_hidden: record.bool("isHidden").unwrap_or(false),
    }
}

fn build_emoticon_pack(id: &str, record: NodeView<'_>, locale: Localization) -> EmoticonPack {
    EmoticonPack {
        id: id.to_string(),
        info: build_info(record, locale),
        emoticon_ids: record.strings("emoticons"),
    }
}

fn build_loot_chest(id: &str, record: NodeView<'_>, locale: Localization) -> LootChest {
    LootChest {
        id: id.to_string(),
        info: build_info(record, locale),
        max_rerolls: record.i64("maxRerolls"),
        type_description_id: record.string("typeDescription"),
    }
}

fn build_matchaward(id: &str, record: NodeView<'_>, locale: Localization) -> Matchaward {
    Matchaward {
        id: id.to_string(),
        info: build_info(record, locale),
        tag: record.string("tag"),
        mvp_screen_image: record.string("mvpScreenImage"),
        score_screen_image: record.string("scoreScreenImage"),
    }
}

fn build_mount(id: &str, record: NodeView<'_>, locale: Localization) -> Mount {
    Mount {
        id: id.to_string(),
        info: build_info(record, locale),
        info_text: rich_text(record, "infoText", locale),
        search_text: record.string("searchText"),
        franchise: record.string("franchise"),
        mount_category: record.string("mountCategory"),
        variation_mount_ids: record.strings("variationMounts"),
    }
}

fn build_portrait_pack(id: &str, record: NodeView<'_>, locale: Localization) -> PortraitPack {
    PortraitPack {
        id: id.to_string(),
        info: build_info(record, locale),
        reward_portrait_ids: record.strings("rewardPortraits"),
    }
}

fn build_reward_portrait(id: &str, record: NodeView<'_>, locale: Localization) -> RewardPortrait {
    RewardPortrait {
        id: id.to_string(),
        info: build_info(record, locale),
        description_unearned: rich_text(record, "descriptionUnearned", locale),
        hero_id: record.string("heroId"),
        icon_slot: record.i64("iconSlot"),
        portrait_pack_id: record.string("portraitPack"),
        texture_sheet: texture_sheet(record),
    }
}

fn build_hero_skin(id: &str, record: NodeView<'_>, locale: Localization) -> HeroSkin {
    HeroSkin {
        id: id.to_string(),
        info: build_info(record, locale),
        info_text: rich_text(record, "infoText", locale),
        search_text: record.string("searchText"),
        franchise: record.string("franchise"),
        features: record.strings("features"),
        variation_skin_ids: record.strings("variationSkins"),
    }
}

fn build_spray(id: &str, record: NodeView<'_>, locale: Localization) -> Spray {
    Spray {
        id: id.to_string(),
        info: build_info(record, locale),
        search_text: record.string("searchText"),
        image: record.string("image"),
        is_animated: record.bool("animation").unwrap_or(false),
    }
}

fn build_type_description(id: &str, record: NodeView<'_>, locale: Localization) -> TypeDescription {
    TypeDescription {
        id: id.to_string(),
        info: build_info(record, locale),
        icon_slot: record.i64("iconSlot"),
        texture_sheet: texture_sheet(record),
        large_image: record.string("largeImage"),
    }
}

fn build_voice_line(id: &str, record: NodeView<'_>, locale: Localization) -> VoiceLine {
    VoiceLine {
        id: id.to_string(),
        info: build_info(record, locale),
        image: record.string("image"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_collection_info() {
        let record = json!({
            "hyperlinkId": "BannerD3DemonHunter",
            "attributeId": "BN6d",
            "name": "Demon Hunter Banner",
            "sortName": "XXDemonHunterBanner",
            "description": "A <c val=\"#TooltipQuest\">banner</c>",
            "rarity": "Rare",
            "releaseDate": "2017-06-27",
            "category": "Diablo"
        });
        let banner = Banner::from_record("BannerD3DemonHunter", NodeView::new(&record), &AssembleOptions::default());

        assert_eq!(banner.id, "BannerD3DemonHunter");
        assert_eq!(banner.info.attribute_id.as_deref(), Some("BN6d"));
        assert_eq!(banner.info.rarity, Some(Rarity::Rare));
        assert_eq!(banner.info.release_date, NaiveDate::from_ymd_opt(2017, 6, 27));
        assert_eq!(banner.info.collection_category.as_deref(), Some("Diablo"));
        assert_eq!(banner.info.description.as_ref().unwrap().plain_text(), "A banner");
        assert!(banner.info.event.is_none());
    }

    #[test]
    fn test_bundle_skins_keep_order() {
        let record = json!({
            "heroIds": ["Zagara", "Abathur"],
            "heroSkins": { "Zagara": ["ZagaraBone"], "Abathur": ["AbathurBone", "AbathurBoneVar1"] },
            "goldBonus": 1000,
            "isDynamicContent": true
        });
        let bundle = Bundle::from_record("Pack", NodeView::new(&record), &AssembleOptions::default());

        let heroes: Vec<&String> = bundle.hero_skins.keys().collect();
        assert_eq!(heroes, vec!["Zagara", "Abathur"]);
        assert_eq!(bundle.hero_skins["Abathur"].len(), 2);
        assert_eq!(bundle.gold_bonus, Some(1000));
        assert!(bundle.is_dynamic_content);
        assert!(bundle.mount_ids.is_empty());
    }

    #[test]
    fn test_kind_specific_fields() {
        let record = json!({
            "expression": ":abatcry:",
            "aliases": [":abathurcry:"],
            "heroId": "Abathur",
            "isHidden": true
        });
        let emoticon = Emoticon::from_record("abathur_cry", NodeView::new(&record), &AssembleOptions::default());
        assert_eq!(emoticon.expression.as_deref(), Some(":abatcry:"));
        assert_eq!(emoticon.aliases, vec![":abathurcry:"]);
        assert!(emoticon.is_hidden);

        let record = json!({ "textureSheet": { "image": "ui_heroes_portraits_sheet.png" }, "iconSlot": 3 });
        let portrait = RewardPortrait::from_record("Portrait", NodeView::new(&record), &AssembleOptions::default());
        assert_eq!(portrait.texture_sheet.as_deref(), Some("ui_heroes_portraits_sheet.png"));
        assert_eq!(portrait.icon_slot, Some(3));
    }

    #[test]
    fn test_locale_stamped_on_rich_text() {
        let record = json!({ "infoText": "Fast" });
        let options = AssembleOptions::default().with_locale(Localization::DeDe);
        let mount = Mount::from_record("Horse", NodeView::new(&record), &options);
        assert_eq!(mount.info_text.unwrap().locale, Localization::DeDe);
    }
}
