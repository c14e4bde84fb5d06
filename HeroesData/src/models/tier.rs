//! Ability and talent tiers
//!
//! A tier is the named array slot an ability or talent was read from
//! (`abilities.basic`, `talents.level4`, ...).

use std::fmt;

use serde::Serialize;

/// Classification bucket of an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum AbilityTier {
    Basic,
    Heroic,
    Trait,
    Mount,
    Activable,
    Hearth,
    Taunt,
    Dance,
    Spray,
    Voice,
    MapMechanic,
    Interact,
    Action,
    Hidden,
    #[default]
    Unknown,
}

impl AbilityTier {
    /// Every tier, in the order slots are assembled.
    pub const ALL: [AbilityTier; 15] = [
        AbilityTier::Basic,
        AbilityTier::Heroic,
        AbilityTier::Trait,
        AbilityTier::Mount,
        AbilityTier::Activable,
        AbilityTier::Hearth,
        AbilityTier::Taunt,
        AbilityTier::Dance,
        AbilityTier::Spray,
        AbilityTier::Voice,
        AbilityTier::MapMechanic,
        AbilityTier::Interact,
        AbilityTier::Action,
        AbilityTier::Hidden,
        AbilityTier::Unknown,
    ];

    /// Name of the array slot holding abilities of this tier.
    #[must_use]
    pub fn slot_name(&self) -> &'static str {
        match self {
            AbilityTier::Basic => "basic",
            AbilityTier::Heroic => "heroic",
            AbilityTier::Trait => "trait",
            AbilityTier::Mount => "mount",
            AbilityTier::Activable => "activable",
            AbilityTier::Hearth => "hearth",
            AbilityTier::Taunt => "taunt",
            AbilityTier::Dance => "dance",
            AbilityTier::Spray => "spray",
            AbilityTier::Voice => "voice",
            AbilityTier::MapMechanic => "mapMechanic",
            AbilityTier::Interact => "interact",
            AbilityTier::Action => "action",
            AbilityTier::Hidden => "hidden",
            AbilityTier::Unknown => "unknown",
        }
    }

    /// Tier for a slot name; `None` for names that are not tier slots.
    #[must_use]
    pub fn from_slot_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.slot_name() == name)
    }
}

impl fmt::Display for AbilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Hero level at which a talent row unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub enum TalentTier {
    Level1,
    Level4,
    Level7,
    Level10,
    Level13,
    Level16,
    Level20,
    #[default]
    Unknown,
}

impl TalentTier {
    /// Talent rows in level order.
    pub const ALL: [TalentTier; 7] = [
        TalentTier::Level1,
        TalentTier::Level4,
        TalentTier::Level7,
        TalentTier::Level10,
        TalentTier::Level13,
        TalentTier::Level16,
        TalentTier::Level20,
    ];

    /// Name of the `talents` array slot for this row.
    #[must_use]
    pub fn slot_name(&self) -> &'static str {
        match self {
            TalentTier::Level1 => "level1",
            TalentTier::Level4 => "level4",
            TalentTier::Level7 => "level7",
            TalentTier::Level10 => "level10",
            TalentTier::Level13 => "level13",
            TalentTier::Level16 => "level16",
            TalentTier::Level20 => "level20",
            TalentTier::Unknown => "unknown",
        }
    }

    /// Hero level of the row, if known.
    #[must_use]
    pub fn level(&self) -> Option<u32> {
        match self {
            TalentTier::Level1 => Some(1),
            TalentTier::Level4 => Some(4),
            TalentTier::Level7 => Some(7),
            TalentTier::Level10 => Some(10),
            TalentTier::Level13 => Some(13),
            TalentTier::Level16 => Some(16),
            TalentTier::Level20 => Some(20),
            TalentTier::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_names_round_trip() {
        for tier in AbilityTier::ALL {
            assert_eq!(AbilityTier::from_slot_name(tier.slot_name()), Some(tier));
        }
        assert_eq!(AbilityTier::from_slot_name("Basic"), None);
        assert_eq!(AbilityTier::MapMechanic.slot_name(), "mapMechanic");
    }

    #[test]
    fn test_talent_levels_ordered() {
        let levels: Vec<u32> = TalentTier::ALL.iter().filter_map(TalentTier::level).collect();
        assert_eq!(levels, vec![1, 4, 7, 10, 13, 16, 20]);
        assert!(TalentTier::Level1 < TalentTier::Level20);
    }
}
