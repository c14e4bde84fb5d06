//! Fields shared by several entity kinds

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::tooltip::TooltipDescription;

/// Item rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Rarity {
    None,
    Common,
    Rare,
    Epic,
    Legendary,
    #[default]
    Unknown,
}

impl Rarity {
    const ALL: [Rarity; 6] = [
        Rarity::None,
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Unknown,
    ];

    /// Parse a rarity name; unrecognized names become [`Rarity::Unknown`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|rarity| rarity.as_str().eq_ignore_ascii_case(value))
            .unwrap_or(Rarity::Unknown)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::None => "None",
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core fields of collection entities (banners, mounts, skins, sprays, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionInfo {
    pub hyperlink_id: Option<String>,
    pub attribute_id: Option<String>,
    pub name: Option<String>,
    /// Name used for sorting in the collection screen.
    pub sort_name: Option<String>,
    pub description: Option<TooltipDescription>,
    pub rarity: Option<Rarity>,
    pub release_date: Option<NaiveDate>,
    /// Event the item was released with.
    pub event: Option<String>,
    pub collection_category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_parse() {
        assert_eq!(Rarity::parse("legendary"), Rarity::Legendary);
        assert_eq!(Rarity::parse("Epic"), Rarity::Epic);
        assert_eq!(Rarity::parse("Mythic"), Rarity::Unknown);
    }
}
