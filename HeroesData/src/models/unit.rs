//! Unit entities

use serde::Serialize;

use super::ability::Ability;
use super::tier::AbilityTier;
use super::tooltip::TooltipDescription;
use crate::identity::IdentityKey;

/// A unit (summon, structure, creep, or the unit part of a hero).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Unit {
    /// Primary id (the document key).
    pub id: String,
    pub hyperlink_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<TooltipDescription>,
    pub inner_radius: Option<f64>,
    pub radius: Option<f64>,
    pub sight: Option<f64>,
    pub speed: Option<f64>,
    /// Experience granted on death.
    pub kill_xp: Option<i64>,
    pub damage_type: Option<String>,
    pub life: Option<UnitLife>,
    pub shield: Option<UnitShield>,
    pub energy: Option<UnitEnergy>,
    pub armor: Vec<UnitArmor>,
    pub weapons: Vec<UnitWeapon>,
    pub attributes: Vec<String>,
    /// Ids of related units this unit can spawn or become.
    pub unit_ids: Vec<String>,
    /// Abilities, followed by sub-abilities, in source order.
    pub abilities: Vec<Ability>,
}

impl Unit {
    /// Top-level abilities (not nested under a parent).
    pub fn top_level_abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(|a| !a.is_sub_ability())
    }

    /// Sub-abilities.
    pub fn sub_abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(|a| a.is_sub_ability())
    }

    /// Abilities of one tier, in source order.
    pub fn abilities_by_tier(&self, tier: AbilityTier) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(move |a| a.tier == tier)
    }

    /// First ability with this exact identity key, falling back to a match
    /// that ignores a missing passive flag on either side.
    #[must_use]
    pub fn find_ability(&self, key: &IdentityKey) -> Option<&Ability> {
        self.abilities
            .iter()
            .find(|a| a.key == *key)
            .or_else(|| self.abilities.iter().find(|a| a.key.matches_loosely(key)))
    }

    /// First ability whose ability id matches.
    #[must_use]
    pub fn find_ability_by_id(&self, ability_id: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.ability_id() == ability_id)
    }

    /// Sub-abilities owned by the ability with this key.
    pub fn sub_abilities_of<'a>(&'a self, parent: &'a IdentityKey) -> impl Iterator<Item = &'a Ability> {
        self.abilities.iter().filter(move |a| {
            a.parent_link
                .as_ref()
                .is_some_and(|link| link == parent || link.matches_loosely(parent))
        })
    }
}

/// Life pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnitLife {
    pub amount: Option<f64>,
    /// Per-level scaling.
    pub scale: Option<f64>,
    pub regen_rate: Option<f64>,
    pub regen_scale: Option<f64>,
    /// Localized name of the life resource.
    pub life_type: Option<String>,
}

/// Shield pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnitShield {
    pub amount: Option<f64>,
    pub scale: Option<f64>,
    pub regen_delay: Option<f64>,
    pub regen_rate: Option<f64>,
    pub regen_scale: Option<f64>,
    pub shield_type: Option<String>,
}

/// Energy pool (mana, fury, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnitEnergy {
    pub amount: Option<f64>,
    pub regen_rate: Option<f64>,
    pub energy_type: Option<String>,
}

/// Armor values against one attacker type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnitArmor {
    /// Attacker type this armor applies to (e.g., "Hero", "Merc").
    pub armor_type: String,
    pub basic: Option<f64>,
    pub ability: Option<f64>,
    pub splash: Option<f64>,
}

/// A basic attack weapon.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnitWeapon {
    pub name_id: Option<String>,
    pub range: Option<f64>,
    pub period: Option<f64>,
    pub damage: Option<f64>,
    pub damage_scale: Option<f64>,
    /// Damage multipliers against target attributes, in source order.
    pub attribute_factors: Vec<WeaponAttributeFactor>,
}

/// Damage multiplier against targets carrying an attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeaponAttributeFactor {
    pub attribute: String,
    pub value: f64,
}
