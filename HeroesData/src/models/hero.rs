//! Hero entities

use chrono::NaiveDate;
use serde::Serialize;

use super::common::Rarity;
use super::talent::Talent;
use super::tier::TalentTier;
use super::tooltip::TooltipDescription;
use super::unit::Unit;

/// A playable hero.
///
/// The unit-level data (stats, abilities) lives in [`Hero::unit`]; hero
/// units (e.g. a hero's alternate forms or controllable summons) are full
/// heroes themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hero {
    #[serde(flatten)]
    pub unit: Unit,
    pub attribute_id: Option<String>,
    /// Id of the in-game unit backing this hero.
    pub unit_id: Option<String>,
    pub difficulty: Option<String>,
    pub franchise: Option<String>,
    pub gender: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// "Melee" or "Ranged".
    pub hero_type: Option<String>,
    pub rarity: Option<Rarity>,
    pub search_text: Option<String>,
    pub info_text: Option<TooltipDescription>,
    pub roles: Vec<String>,
    pub expanded_role: Option<String>,
    pub ratings: Option<HeroRatings>,
    pub portraits: HeroPortraits,
    /// Talents in row order, then source order within a row.
    pub talents: Vec<Talent>,
    pub hero_units: Vec<Hero>,
}

impl Hero {
    /// Primary id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.unit.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.unit.name.as_deref()
    }

    /// Talents of one row.
    pub fn talents_by_tier(&self, tier: TalentTier) -> impl Iterator<Item = &Talent> {
        self.talents.iter().filter(move |t| t.tier == tier)
    }

    /// First talent with this talent tree id.
    #[must_use]
    pub fn find_talent(&self, talent_tree_id: &str) -> Option<&Talent> {
        self.talents
            .iter()
            .find(|t| t.talent_tree_id() == talent_tree_id)
    }

    /// Hero unit by id.
    #[must_use]
    pub fn find_hero_unit(&self, id: &str) -> Option<&Hero> {
        self.hero_units.iter().find(|unit| unit.id() == id)
    }
}

/// Draft screen ratings (1-10).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroRatings {
    pub complexity: Option<f64>,
    pub damage: Option<f64>,
    pub survivability: Option<f64>,
    pub utility: Option<f64>,
}

/// Portrait image file names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroPortraits {
    pub hero_select: Option<String>,
    pub leaderboard: Option<String>,
    pub loading: Option<String>,
    pub party_panel: Option<String>,
    pub target: Option<String>,
    pub draft_screen: Option<String>,
    pub party_frames: Vec<String>,
}
