//! Unit and hero records
//!
//! A hero record is a unit record with extra hero fields, talents and an
//! optional `heroUnits` array:
//!
//! ```json
//! "heroUnits": [
//!   { "AbathurSymbiote": { "name": "Symbiote", "abilities": { ... } } }
//! ]
//! ```
//!
//! Each hero unit is assembled as a full hero, recursively.

use super::abilities::{assemble_abilities, assemble_sub_abilities, assemble_talents};
use crate::document::{AlternateKey, AssembleOptions, Entity};
use crate::models::{
    AbilityTier, Hero, HeroPortraits, HeroRatings, Rarity, TooltipDescription, Unit, UnitArmor,
    UnitEnergy, UnitLife, UnitShield, UnitWeapon, WeaponAttributeFactor,
};
use crate::view::NodeView;

const HERO_UNITS_FIELD: &str = "heroUnits";

impl Entity for Unit {
    const KIND: &'static str = "unit";
    const ALTERNATE_KEYS: &'static [AlternateKey] = &[AlternateKey::HyperlinkId, AlternateKey::Name];

    fn from_record(id: &str, record: NodeView<'_>, options: &AssembleOptions) -> Self {
        build_unit(id, record, options)
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Hero {
    const KIND: &'static str = "hero";
    const ALTERNATE_KEYS: &'static [AlternateKey] = &[
        AlternateKey::HyperlinkId,
        AlternateKey::AttributeId,
        AlternateKey::Name,
        AlternateKey::UnitId,
    ];

    fn from_record(id: &str, record: NodeView<'_>, options: &AssembleOptions) -> Self {
        build_hero(id, record, options)
    }

    fn id(&self) -> &str {
        &self.unit.id
    }
}

fn build_unit(id: &str, record: NodeView<'_>, options: &AssembleOptions) -> Unit {
    let locale = options.locale;

    let mut abilities = Vec::new();
    if options.abilities {
        abilities.extend(assemble_abilities(record, &AbilityTier::ALL, locale));
    }
    if options.sub_abilities {
        abilities.extend(assemble_sub_abilities(record, &AbilityTier::ALL, locale));
    }

    tracing::trace!("Assembled unit {} with {} abilities", id, abilities.len());

    Unit {
        id: id.to_string(),
        hyperlink_id: record.string("hyperlinkId"),
        name: record.string("name"),
        description: record
            .str("description")
            .map(|text| TooltipDescription::new(text, locale)),
        inner_radius: record.f64("innerRadius"),
        radius: record.f64("radius"),
        sight: record.f64("sight"),
        speed: record.f64("speed"),
        kill_xp: record.i64("killXP"),
        damage_type: record.string("damageType"),
        life: record.get("life").map(|life| UnitLife {
            amount: life.f64("amount"),
            scale: life.f64("scale"),
            regen_rate: life.f64("regenRate"),
            regen_scale: life.f64("regenScale"),
            life_type: life.string("type"),
        }),
        shield: record.get("shield").map(|shield| UnitShield {
            amount: shield.f64("amount"),
            scale: shield.f64("scale"),
            regen_delay: shield.f64("regenDelay"),
            regen_rate: shield.f64("regenRate"),
            regen_scale: shield.f64("regenScale"),
            shield_type: shield.string("type"),
        }),
        energy: record.get("energy").map(|energy| UnitEnergy {
            amount: energy.f64("amount"),
            regen_rate: energy.f64("regenRate"),
            energy_type: energy.string("type"),
        }),
        armor: build_armor(record),
        weapons: record.array("weapons").map(build_weapon).collect(),
        attributes: record.strings("attributes"),
        unit_ids: record.strings("unitIds"),
        abilities,
    }
}

/// `"armor": { "Hero": { "basic": 0, "ability": 0, "splash": 0 }, ... }`
fn build_armor(record: NodeView<'_>) -> Vec<UnitArmor> {
    let Some(armor) = record.get("armor") else {
        return Vec::new();
    };

    armor
        .entries()
        .map(|(armor_type, values)| UnitArmor {
            armor_type: armor_type.to_string(),
            basic: values.f64("basic"),
            ability: values.f64("ability"),
            splash: values.f64("splash"),
        })
        .collect()
}

fn build_weapon(node: NodeView<'_>) -> UnitWeapon {
    let attribute_factors = node
        .get("damageFactor")
        .map(|factors| {
            factors
                .entries()
                .filter_map(|(attribute, value)| {
                    value.value().as_f64().map(|value| WeaponAttributeFactor {
                        attribute: attribute.to_string(),
                        value,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    UnitWeapon {
        name_id: node.string("nameId"),
        range: node.f64("range"),
        period: node.f64("period"),
        damage: node.f64("damage"),
        damage_scale: node.f64("damageScale"),
        attribute_factors,
    }
}

fn build_hero(id: &str, record: NodeView<'_>, options: &AssembleOptions) -> Hero {
    let locale = options.locale;

    let talents = if options.talents {
        assemble_talents(record, locale)
    } else {
        Vec::new()
    };

    let mut hero_units = Vec::new();
    if options.hero_units {
        for element in record.array(HERO_UNITS_FIELD) {
            for (unit_id, unit_record) in element.entries() {
                if unit_record.is_object() {
                    hero_units.push(build_hero(unit_id, unit_record, options));
                } else {
                    tracing::warn!("Skipping hero unit '{}' of {}: not an object", unit_id, id);
                }
            }
        }
    }

    Hero {
        unit: build_unit(id, record, options),
        attribute_id: record.string("attributeId"),
        unit_id: record.string("unitId"),
        difficulty: record.string("difficulty"),
        franchise: record.string("franchise"),
        gender: record.string("gender"),
        title: record.string("title"),
        release_date: record.date("releaseDate"),
        hero_type: record.string("type"),
        rarity: record.str("rarity").map(Rarity::parse),
        search_text: record.string("searchText"),
        info_text: record
            .str("infoText")
            .map(|text| TooltipDescription::new(text, locale)),
        roles: record.strings("roles"),
        expanded_role: record.string("expandedRole"),
        ratings: record.get("ratings").map(|ratings| HeroRatings {
            complexity: ratings.f64("complexity"),
            damage: ratings.f64("damage"),
            survivability: ratings.f64("survivability"),
            utility: ratings.f64("utility"),
        }),
        portraits: record
            .get("portraits")
            .map(build_portraits)
            .unwrap_or_default(),
        talents,
        hero_units,
    }
}

fn build_portraits(node: NodeView<'_>) -> HeroPortraits {
    HeroPortraits {
        hero_select: node.string("heroSelect"),
        leaderboard: node.string("leaderboard"),
        loading: node.string("loading"),
        party_panel: node.string("partyPanel"),
        target: node.string("target"),
        draft_screen: node.string("draftScreen"),
        party_frames: node.strings("partyFrames"),
    }
}
