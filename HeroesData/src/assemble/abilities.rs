//! Tiered ability and talent assembly
//!
//! Abilities are stored in named array slots, one per tier:
//!
//! ```json
//! "abilities": {
//!   "basic":  [ { "abilityId": "AbathurSymbiote", "buttonId": "AbathurSymbiote", "abilityType": "Q" } ],
//!   "heroic": [ ... ]
//! },
//! "subAbilities": [
//!   { "AbathurSymbiote|AbathurSymbiote|Q|False": { "basic": [ ... ] } }
//! ]
//! ```
//!
//! Each `subAbilities` element is a single-key object whose key is the
//! canonical identity of the owning ability and whose value is another
//! tier-slot object. Sub-abilities get that identity as their parent link.

use crate::identity::{AbilityKind, IdentityKey};
use crate::locale::Localization;
use crate::models::{
    Ability, AbilityTalentTooltip, AbilityTier, Talent, TalentTier, TooltipCharges,
    TooltipDescription,
};
use crate::view::NodeView;

/// Property holding the tier-slot object of an entity.
pub const ABILITIES_FIELD: &str = "abilities";
/// Property holding the sub-ability array of an entity.
pub const SUB_ABILITIES_FIELD: &str = "subAbilities";
/// Property holding the talent tier-slot object of a hero.
pub const TALENTS_FIELD: &str = "talents";

/// Assemble the abilities of an entity from its `abilities` object.
#[must_use]
pub fn assemble_abilities(
    entity: NodeView<'_>,
    tiers: &[AbilityTier],
    locale: Localization,
) -> Vec<Ability> {
    entity
        .get(ABILITIES_FIELD)
        .map(|slots| assemble_tiers(slots, tiers, None, locale))
        .unwrap_or_default()
}

/// Build one ability per element of every requested tier slot present on
/// `slots`.
///
/// Slots are visited in the order of `tiers`; elements keep their source
/// order. `parent_link` is stamped on every ability built.
#[must_use]
pub fn assemble_tiers(
    slots: NodeView<'_>,
    tiers: &[AbilityTier],
    parent_link: Option<&IdentityKey>,
    locale: Localization,
) -> Vec<Ability> {
    let mut abilities = Vec::new();

    for tier in tiers {
        for node in slots.array(tier.slot_name()) {
            let ability = build_ability(node, *tier, parent_link, locale);
            tracing::trace!("Assembled {} ability {}", tier, ability.key);
            abilities.push(ability);
        }
    }

    abilities
}

/// Assemble every sub-ability listed in the entity's `subAbilities` array.
///
/// Nested `subAbilities` inside a sub-ability slot object are followed as
/// well, each level linked to its own parent. Entries whose key is not a
/// valid identity are skipped.
#[must_use]
pub fn assemble_sub_abilities(
    entity: NodeView<'_>,
    tiers: &[AbilityTier],
    locale: Localization,
) -> Vec<Ability> {
    let mut abilities = Vec::new();
    collect_sub_abilities(entity, tiers, locale, &mut abilities);
    abilities
}

fn collect_sub_abilities(
    container: NodeView<'_>,
    tiers: &[AbilityTier],
    locale: Localization,
    out: &mut Vec<Ability>,
) {
    for element in container.array(SUB_ABILITIES_FIELD) {
        for (parent_key, slots) in element.entries() {
            let parent = match parent_key.parse::<IdentityKey>() {
                Ok(key) => key,
                Err(e) => {
                    tracing::warn!("Skipping sub-abilities: {}", e);
                    continue;
                }
            };

            out.extend(assemble_tiers(slots, tiers, Some(&parent), locale));
            collect_sub_abilities(slots, tiers, locale, out);
        }
    }
}

/// Assemble the talents of a hero, row by row.
#[must_use]
pub fn assemble_talents(entity: NodeView<'_>, locale: Localization) -> Vec<Talent> {
    let Some(slots) = entity.get(TALENTS_FIELD) else {
        return Vec::new();
    };

    let mut talents = Vec::new();
    for tier in TalentTier::ALL {
        for node in slots.array(tier.slot_name()) {
            let talent = build_talent(node, tier, locale);
            tracing::trace!("Assembled {:?} talent {}", tier, talent.key);
            talents.push(talent);
        }
    }
    talents
}

/// Build one ability from its node.
#[must_use]
pub fn build_ability(
    node: NodeView<'_>,
    tier: AbilityTier,
    parent_link: Option<&IdentityKey>,
    locale: Localization,
) -> Ability {
    let is_passive = node.bool("isPassive").unwrap_or(false);

    Ability {
        key: identity_of(node, node.str("abilityId"), is_passive),
        tier,
        name: node.string("name"),
        icon: node.string("icon"),
        tooltip: build_tooltip(node, locale),
        is_active: node.bool("isActive").unwrap_or(false),
        is_passive,
        is_quest: node.bool("isQuest").unwrap_or(false),
        parent_link: parent_link.cloned(),
    }
}

/// Build one talent from its node.
#[must_use]
pub fn build_talent(node: NodeView<'_>, tier: TalentTier, locale: Localization) -> Talent {
    let is_passive = node.bool("isPassive").unwrap_or(false);
    let reference_id = node.str("talentTreeId").or_else(|| node.str("abilityId"));

    Talent {
        key: identity_of(node, reference_id, is_passive),
        tier,
        column: node.u32("sort"),
        ability_id: node.string("abilityId"),
        name: node.string("name"),
        icon: node.string("icon"),
        tooltip: build_tooltip(node, locale),
        is_active: node.bool("isActive").unwrap_or(false),
        is_passive,
        is_quest: node.bool("isQuest").unwrap_or(false),
        ability_talent_link_ids: node.strings("abilityTalentLinkIds"),
        prerequisite_talent_ids: node.strings("prerequisiteTalentIds"),
    }
}

/// Identity of a node. Keys built here always carry the passive flag.
fn identity_of(node: NodeView<'_>, reference_id: Option<&str>, is_passive: bool) -> IdentityKey {
    let kind = node
        .str("abilityType")
        .map_or(AbilityKind::Unknown, AbilityKind::parse);

    let reference_id = reference_id.unwrap_or_default();
    if reference_id.is_empty() {
        tracing::warn!(
            "Node with button '{}' has no reference id",
            node.str("buttonId").unwrap_or_default()
        );
    }

    IdentityKey::new(
        reference_id,
        node.str("buttonId").unwrap_or_default(),
        kind,
    )
    .with_passive(is_passive)
}

fn build_tooltip(node: NodeView<'_>, locale: Localization) -> AbilityTalentTooltip {
    let text = |field: &str| node.str(field).map(|s| TooltipDescription::new(s, locale));

    AbilityTalentTooltip {
        short: text("shortTooltip"),
        full: text("fullTooltip"),
        cooldown: text("cooldownTooltip"),
        energy: text("energyTooltip"),
        life: text("lifeTooltip"),
        charges: node.get("charges").map(|charges| TooltipCharges {
            count_max: charges.u32("countMax"),
            count_use: charges.u32("countUse"),
            count_start: charges.u32("countStart"),
            hide_count: charges.bool("hideCount"),
            recast_cooldown: charges.f64("recastCooldown"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tiers_assembled_in_order() {
        let entity = json!({
            "abilities": {
                "heroic": [ { "abilityId": "H1", "buttonId": "H1", "abilityType": "Heroic" } ],
                "basic": [
                    { "abilityId": "Q1", "buttonId": "Q1", "abilityType": "Q", "name": "First" },
                    { "abilityId": "W1", "buttonId": "W1", "abilityType": "W" }
                ]
            }
        });

        let abilities = assemble_abilities(NodeView::new(&entity), &AbilityTier::ALL, Localization::EnUs);
        let ids: Vec<&str> = abilities.iter().map(Ability::ability_id).collect();
        assert_eq!(ids, vec!["Q1", "W1", "H1"]);
        assert_eq!(abilities[0].tier, AbilityTier::Basic);
        assert_eq!(abilities[2].tier, AbilityTier::Heroic);
        assert_eq!(abilities[0].name.as_deref(), Some("First"));
        assert!(abilities.iter().all(|a| a.parent_link.is_none()));
    }

    #[test]
    fn test_only_requested_tiers() {
        let entity = json!({
            "abilities": {
                "basic": [ { "abilityId": "Q1" } ],
                "hearth": [ { "abilityId": "Hearth" } ]
            }
        });
        let abilities = assemble_abilities(NodeView::new(&entity), &[AbilityTier::Hearth], Localization::EnUs);
        assert_eq!(abilities.len(), 1);
        assert_eq!(abilities[0].ability_id(), "Hearth");
    }

    #[test]
    fn test_absent_fields_stay_unset() {
        let node = json!({ "abilityId": "A", "buttonId": "B", "abilityType": "Sideways" });
        let ability = build_ability(NodeView::new(&node), AbilityTier::Basic, None, Localization::EnUs);

        assert_eq!(ability.key.kind, AbilityKind::Unknown);
        assert_eq!(ability.key.is_passive, Some(false));
        assert!(ability.name.is_none());
        assert!(ability.tooltip.short.is_none());
        assert!(ability.tooltip.charges.is_none());
        assert!(!ability.is_active);
    }

    #[test]
    fn test_missing_reference_id_key_still_parses() {
        let node = json!({ "buttonId": "B", "abilityType": "Q" });
        let ability = build_ability(NodeView::new(&node), AbilityTier::Basic, None, Localization::EnUs);

        assert_eq!(ability.key.canonical(), "|B|Q|False");
        let parsed: IdentityKey = ability.key.canonical().parse().unwrap();
        assert_eq!(parsed, ability.key);
    }

    #[test]
    fn test_passive_parent_links() {
        let entity = json!({
            "abilities": {
                "trait": [ { "abilityId": "TracerRecall", "buttonId": "TracerRecall", "abilityType": "Trait", "isPassive": true } ],
                "basic": [ { "abilityId": "TracerBlink", "buttonId": "TracerBlink", "abilityType": "E" } ]
            },
            "subAbilities": [
                { "TracerRecall|TracerRecall|Trait": { "basic": [ { "abilityId": "Lost" } ] } },
                { "TracerBlink|TracerBlink|E": { "basic": [ { "abilityId": "BlinkFollowUp" } ] } }
            ]
        });
        let node = NodeView::new(&entity);
        let abilities = assemble_abilities(node, &AbilityTier::ALL, Localization::EnUs);
        let subs = assemble_sub_abilities(node, &AbilityTier::ALL, Localization::EnUs);

        let recall = abilities.iter().find(|a| a.ability_id() == "TracerRecall").unwrap();
        let blink = abilities.iter().find(|a| a.ability_id() == "TracerBlink").unwrap();

        // A link without the flag means non-passive, so it never names the passive trait.
        let recall_link = subs[0].parent_link.as_ref().unwrap();
        assert!(!recall.key.matches_loosely(recall_link));
        assert!(!recall.key.lookup_forms().contains(&recall_link.canonical()));

        let blink_link = subs[1].parent_link.as_ref().unwrap();
        assert!(blink.key.matches_loosely(blink_link));
        assert!(blink.key.lookup_forms().contains(&blink_link.canonical()));
    }

    #[test]
    fn test_tooltips_and_charges() {
        let node = json!({
            "abilityId": "A", "buttonId": "A", "abilityType": "E",
            "isActive": true,
            "cooldownTooltip": "Cooldown: 12 seconds",
            "shortTooltip": "Short",
            "fullTooltip": "Full<n/>text",
            "charges": { "countMax": 2, "countUse": 1, "hideCount": false }
        });
        let ability = build_ability(NodeView::new(&node), AbilityTier::Basic, None, Localization::KoKr);

        let cooldown = ability.tooltip.cooldown.as_ref().unwrap();
        assert_eq!(cooldown.text, "Cooldown: 12 seconds");
        assert_eq!(cooldown.locale, Localization::KoKr);
        assert_eq!(ability.tooltip.full.as_ref().unwrap().plain_text(), "Full\ntext");
        let charges = ability.tooltip.charges.as_ref().unwrap();
        assert_eq!(charges.count_max, Some(2));
        assert_eq!(charges.count_start, None);
        assert!(ability.is_active);
    }

    #[test]
    fn test_sub_abilities_link_to_parent() {
        let parent_key = "AbathurSymbiote|AbathurSymbiote|Q|False";
        let entity = json!({
            "subAbilities": [
                { parent_key: {
                    "basic": [
                        { "abilityId": "AbathurSymbioteSpikeBurst", "buttonId": "SpikeBurst", "abilityType": "Q" },
                        { "abilityId": "AbathurSymbioteCarapace", "buttonId": "Carapace", "abilityType": "W" }
                    ]
                } }
            ]
        });

        let subs = assemble_sub_abilities(NodeView::new(&entity), &AbilityTier::ALL, Localization::EnUs);
        assert_eq!(subs.len(), 2);
        for sub in &subs {
            assert_eq!(sub.parent_link.as_ref().unwrap().canonical(), parent_key);
        }
    }

    #[test]
    fn test_nested_sub_abilities_and_bad_keys() {
        let entity = json!({
            "subAbilities": [
                { "not-a-key": { "basic": [ { "abilityId": "Lost" } ] } },
                { "A|A|Q": {
                    "basic": [ { "abilityId": "B", "buttonId": "B", "abilityType": "Q" } ],
                    "subAbilities": [
                        { "B|B|Q|False": { "basic": [ { "abilityId": "C" } ] } }
                    ]
                } }
            ]
        });

        let subs = assemble_sub_abilities(NodeView::new(&entity), &AbilityTier::ALL, Localization::EnUs);
        let ids: Vec<&str> = subs.iter().map(Ability::ability_id).collect();
        assert_eq!(ids, vec!["B", "C"]);
        assert_eq!(subs[0].parent_link.as_ref().unwrap().canonical(), "A|A|Q");
        assert_eq!(subs[1].parent_link.as_ref().unwrap().canonical(), "B|B|Q|False");
    }

    #[test]
    fn test_talents_by_row() {
        let entity = json!({
            "talents": {
                "level4": [ { "talentTreeId": "T4", "buttonId": "T4", "abilityType": "W", "sort": 1 } ],
                "level1": [
                    {
                        "talentTreeId": "T1a", "abilityId": "Q1", "buttonId": "T1a", "abilityType": "Q",
                        "sort": 1, "isQuest": true,
                        "abilityTalentLinkIds": ["Q1"],
                        "prerequisiteTalentIds": []
                    },
                    { "talentTreeId": "T1b", "buttonId": "T1b", "abilityType": "Passive", "sort": 2, "isPassive": true }
                ]
            }
        });

        let talents = assemble_talents(NodeView::new(&entity), Localization::EnUs);
        let ids: Vec<&str> = talents.iter().map(Talent::talent_tree_id).collect();
        assert_eq!(ids, vec!["T1a", "T1b", "T4"]);
        assert_eq!(talents[0].tier, TalentTier::Level1);
        assert_eq!(talents[0].ability_talent_link_ids, vec!["Q1"]);
        assert!(talents[0].is_quest);
        assert_eq!(talents[1].key.canonical(), "T1b|T1b|Unknown|True");
        assert_eq!(talents[2].column, Some(1));
        assert_eq!(talents[2].level(), Some(4));
    }
}
