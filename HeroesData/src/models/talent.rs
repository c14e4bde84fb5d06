//! Talent nodes

use serde::Serialize;

use super::tier::TalentTier;
use super::tooltip::AbilityTalentTooltip;
use crate::identity::IdentityKey;

/// A hero talent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Talent {
    /// Identity keyed by the talent tree id.
    pub key: IdentityKey,
    /// Talent row.
    pub tier: TalentTier,
    /// Position within the row (1-based `sort` value).
    pub column: Option<u32>,
    /// Ability the talent modifies, when it names one.
    pub ability_id: Option<String>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub tooltip: AbilityTalentTooltip,
    pub is_active: bool,
    pub is_passive: bool,
    pub is_quest: bool,
    /// Ability ids this talent upgrades.
    pub ability_talent_link_ids: Vec<String>,
    /// Talent tree ids that must be picked first.
    pub prerequisite_talent_ids: Vec<String>,
}

impl Talent {
    /// The talent tree id (reference id of the identity key).
    #[must_use]
    pub fn talent_tree_id(&self) -> &str {
        &self.key.reference_id
    }

    /// Hero level at which this talent becomes available.
    #[must_use]
    pub fn level(&self) -> Option<u32> {
        self.tier.level()
    }
}
