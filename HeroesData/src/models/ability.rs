//! Ability nodes

use serde::Serialize;

use super::tier::AbilityTier;
use super::tooltip::AbilityTalentTooltip;
use crate::identity::IdentityKey;

/// An ability of a hero or unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ability {
    /// Identity used for sub-ability and game string cross-references.
    pub key: IdentityKey,
    /// Slot the ability was read from.
    pub tier: AbilityTier,
    /// Display name.
    pub name: Option<String>,
    /// Icon file name.
    pub icon: Option<String>,
    /// Tooltip text and costs.
    pub tooltip: AbilityTalentTooltip,
    pub is_active: bool,
    pub is_passive: bool,
    pub is_quest: bool,
    /// Identity of the owning ability; set only on sub-abilities.
    pub parent_link: Option<IdentityKey>,
}

impl Ability {
    /// Whether this ability is nested under another ability.
    #[must_use]
    pub fn is_sub_ability(&self) -> bool {
        self.parent_link.is_some()
    }

    /// The ability id (reference id of the identity key).
    #[must_use]
    pub fn ability_id(&self) -> &str {
        &self.key.reference_id
    }

    /// The button id of the identity key.
    #[must_use]
    pub fn button_id(&self) -> &str {
        &self.key.button_id
    }
}
