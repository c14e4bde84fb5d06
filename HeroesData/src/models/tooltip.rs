//! Tooltip text and ability/talent tooltip aggregates

use serde::Serialize;

use crate::locale::Localization;

/// Rich-text description in the game's tooltip markup.
///
/// The markup is kept verbatim; [`TooltipDescription::plain_text`] gives a
/// tag-free rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipDescription {
    /// Raw text including markup tags.
    pub text: String,
    /// Locale the text is written in.
    pub locale: Localization,
}

impl TooltipDescription {
    pub fn new(text: impl Into<String>, locale: Localization) -> Self {
        Self {
            text: text.into(),
            locale,
        }
    }

    /// The text with markup, as stored.
    #[must_use]
    pub fn colored_text(&self) -> &str {
        &self.text
    }

    /// The text with all markup tags removed. `<n/>` becomes a newline.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut result = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(start) = rest.find('<') {
            result.push_str(&rest[..start]);
            let Some(end) = rest[start..].find('>') else {
                // Unterminated tag, keep the remainder as text
                result.push_str(&rest[start..]);
                return result;
            };
            let tag = &rest[start + 1..start + end];
            if tag.trim().eq_ignore_ascii_case("n/") {
                result.push('\n');
            }
            rest = &rest[start + end + 1..];
        }
        result.push_str(rest);
        result
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Charge metadata of an ability or talent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TooltipCharges {
    pub count_max: Option<u32>,
    pub count_use: Option<u32>,
    pub count_start: Option<u32>,
    pub hide_count: Option<bool>,
    pub recast_cooldown: Option<f64>,
}

impl TooltipCharges {
    /// Whether the ability actually uses charges.
    #[must_use]
    pub fn has_charges(&self) -> bool {
        self.count_max.is_some_and(|max| max > 0)
    }
}

/// All tooltip text of an ability or talent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AbilityTalentTooltip {
    /// Short tooltip (one line shown on hover).
    pub short: Option<TooltipDescription>,
    /// Full tooltip.
    pub full: Option<TooltipDescription>,
    /// Cooldown text, e.g. "Cooldown: 4 seconds".
    pub cooldown: Option<TooltipDescription>,
    /// Energy cost text, e.g. "Mana: 50".
    pub energy: Option<TooltipDescription>,
    /// Life cost text.
    pub life: Option<TooltipDescription>,
    /// Charge counts, when the ability has charges.
    pub charges: Option<TooltipCharges>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_strips_markup() {
        let desc = TooltipDescription::new(
            "Deals <c val=\"bfd4fd\">120</c> damage.<n/>Heals allies.",
            Localization::EnUs,
        );
        assert_eq!(desc.plain_text(), "Deals 120 damage.\nHeals allies.");
        assert!(desc.colored_text().contains("<c val="));
    }

    #[test]
    fn test_plain_text_unterminated_tag() {
        let desc = TooltipDescription::new("a <b", Localization::EnUs);
        assert_eq!(desc.plain_text(), "a <b");
    }

    #[test]
    fn test_charges() {
        assert!(!TooltipCharges::default().has_charges());
        let charges = TooltipCharges {
            count_max: Some(3),
            ..TooltipCharges::default()
        };
        assert!(charges.has_charges());
    }
}
