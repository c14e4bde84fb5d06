//! Ability/talent identity keys
//!
//! Abilities and talents are cross-referenced by a composite identity made of
//! a reference id, a button id, an ability kind and an optional passive flag.
//! The same identity keys a parent ability's sub-abilities in the data
//! document and every ability/talent fragment in the game strings document.
//!
//! The canonical string joins the parts with `|`:
//!
//! ```text
//! AbathurSymbiote|AbathurSymbiote|Q|False
//! AbathurSymbiote|AbathurSymbiote|Q          (passive flag absent)
//! ```
//!
//! The 3-part and 4-part forms are different keys. Lookups that must tolerate
//! a parent reference captured without the passive flag go through
//! [`IdentityKey::lookup_forms`].

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Separator between the parts of a canonical identity key.
pub const SEPARATOR: char = '|';

/// The ability kind tag of an identity key (the hotkey slot or category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum AbilityKind {
    Q,
    W,
    E,
    Heroic,
    Z,
    B,
    Trait,
    Active,
    Hidden,
    Taunt,
    Dance,
    Spray,
    Voice,
    MapMechanic,
    Interact,
    #[default]
    Unknown,
}

impl AbilityKind {
    /// All recognized kinds, `Unknown` last.
    pub const ALL: [AbilityKind; 16] = [
        AbilityKind::Q,
        AbilityKind::W,
        AbilityKind::E,
        AbilityKind::Heroic,
        AbilityKind::Z,
        AbilityKind::B,
        AbilityKind::Trait,
        AbilityKind::Active,
        AbilityKind::Hidden,
        AbilityKind::Taunt,
        AbilityKind::Dance,
        AbilityKind::Spray,
        AbilityKind::Voice,
        AbilityKind::MapMechanic,
        AbilityKind::Interact,
        AbilityKind::Unknown,
    ];

    /// Parse a kind tag, case-insensitively.
    ///
    /// Unrecognized tags resolve to [`AbilityKind::Unknown`] so that data
    /// carrying kinds added after this library was written still loads.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
            .unwrap_or(AbilityKind::Unknown)
    }

    /// The tag as it appears in data and identity keys.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityKind::Q => "Q",
            AbilityKind::W => "W",
            AbilityKind::E => "E",
            AbilityKind::Heroic => "Heroic",
            AbilityKind::Z => "Z",
            AbilityKind::B => "B",
            AbilityKind::Trait => "Trait",
            AbilityKind::Active => "Active",
            AbilityKind::Hidden => "Hidden",
            AbilityKind::Taunt => "Taunt",
            AbilityKind::Dance => "Dance",
            AbilityKind::Spray => "Spray",
            AbilityKind::Voice => "Voice",
            AbilityKind::MapMechanic => "MapMechanic",
            AbilityKind::Interact => "Interact",
            AbilityKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite identity of an ability or talent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IdentityKey {
    /// Ability id (abilities) or talent tree id (talents).
    pub reference_id: String,
    /// Button id shown for the ability/talent.
    pub button_id: String,
    /// Kind tag.
    pub kind: AbilityKind,
    /// Passive flag; `None` when the source did not carry one.
    pub is_passive: Option<bool>,
}

impl IdentityKey {
    /// Create a key without a passive flag.
    pub fn new(reference_id: impl Into<String>, button_id: impl Into<String>, kind: AbilityKind) -> Self {
        Self {
            reference_id: reference_id.into(),
            button_id: button_id.into(),
            kind,
            is_passive: None,
        }
    }

    /// Set the passive flag.
    #[must_use]
    pub fn with_passive(mut self, is_passive: bool) -> Self {
        self.is_passive = Some(is_passive);
        self
    }

    /// Canonical string form used as a cross-reference key.
    #[must_use]
    pub fn canonical(&self) -> String {
        canonicalize(&self.reference_id, &self.button_id, Some(self.kind), self.is_passive)
    }

    /// The same key with the passive flag removed.
    #[must_use]
    pub fn without_passive(&self) -> Self {
        Self {
            is_passive: None,
            ..self.clone()
        }
    }

    /// Canonical forms to try, in order, when the other side of a lookup may
    /// have been captured with or without the passive flag.
    ///
    /// A missing flag means non-passive. The exact form always comes first;
    /// a non-passive key is also tried in its other form (`False` or no
    /// flag). A passive key only matches itself. Every form returned names a
    /// key that [`IdentityKey::matches_loosely`] accepts.
    #[must_use]
    pub fn lookup_forms(&self) -> Vec<String> {
        let exact = self.canonical();
        match self.is_passive {
            Some(true) => vec![exact],
            Some(false) => vec![exact, self.without_passive().canonical()],
            None => vec![exact, self.clone().with_passive(false).canonical()],
        }
    }

    /// Whether two keys name the same ability, reading a missing passive flag
    /// as `False`.
    #[must_use]
    pub fn matches_loosely(&self, other: &IdentityKey) -> bool {
        self.reference_id == other.reference_id
            && self.button_id == other.button_id
            && self.kind == other.kind
            && match (self.is_passive, other.is_passive) {
                (Some(a), Some(b)) => a == b,
                (Some(flag), None) | (None, Some(flag)) => !flag,
                (None, None) => true,
            }
    }
}

/// Join identity parts into the canonical string.
///
/// `kind` falls back to `Unknown` when absent; `is_passive` is omitted when
/// absent.
#[must_use]
pub fn canonicalize(
    reference_id: &str,
    button_id: &str,
    kind: Option<AbilityKind>,
    is_passive: Option<bool>,
) -> String {
    let kind = kind.unwrap_or_default();
    match is_passive {
        Some(flag) => format!(
            "{reference_id}{SEPARATOR}{button_id}{SEPARATOR}{kind}{SEPARATOR}{}",
            format_bool(flag)
        ),
        None => format!("{reference_id}{SEPARATOR}{button_id}{SEPARATOR}{kind}"),
    }
}

fn format_bool(flag: bool) -> &'static str {
    if flag { "True" } else { "False" }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl FromStr for IdentityKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        let (reference_id, button_id, kind, is_passive) = match parts.as_slice() {
            [reference_id, button_id, kind] => (*reference_id, *button_id, *kind, None),
            [reference_id, button_id, kind, passive] => {
                let flag = parse_bool(passive)
                    .ok_or_else(|| Error::InvalidIdentityKey(s.to_string()))?;
                (*reference_id, *button_id, *kind, Some(flag))
            }
            _ => return Err(Error::InvalidIdentityKey(s.to_string())),
        };

        Ok(Self {
            reference_id: reference_id.to_string(),
            button_id: button_id.to_string(),
            kind: AbilityKind::parse(kind),
            is_passive,
        })
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl Serialize for IdentityKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_forms() {
        let key = IdentityKey::new("AbathurSymbiote", "AbathurSymbiote", AbilityKind::Q);
        assert_eq!(key.canonical(), "AbathurSymbiote|AbathurSymbiote|Q");
        assert_eq!(
            key.clone().with_passive(false).canonical(),
            "AbathurSymbiote|AbathurSymbiote|Q|False"
        );
        assert_eq!(canonicalize("A", "B", None, Some(true)), "A|B|Unknown|True");
    }

    #[test]
    fn test_three_and_four_part_keys_differ() {
        let three: IdentityKey = "A|B|Q".parse().unwrap();
        let four: IdentityKey = "A|B|Q|False".parse().unwrap();
        assert_ne!(three, four);
        assert_ne!(three.canonical(), four.canonical());
        assert!(three.matches_loosely(&four));
    }

    #[test]
    fn test_parse_round_trips_canonical_form() {
        let text = "TracerMelee|TracerMelee|Trait|True";
        let key: IdentityKey = text.parse().unwrap();
        assert_eq!(key.kind, AbilityKind::Trait);
        assert_eq!(key.is_passive, Some(true));
        assert_eq!(key.to_string(), text);
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let key: IdentityKey = "A|B|Ultimate".parse().unwrap();
        assert_eq!(key.kind, AbilityKind::Unknown);
        assert_eq!(AbilityKind::parse("heroic"), AbilityKind::Heroic);
        assert_eq!(AbilityKind::parse(""), AbilityKind::Unknown);
    }

    #[test]
    fn test_invalid_keys() {
        assert!("A|B".parse::<IdentityKey>().is_err());
        assert!("A|B|Q|Maybe".parse::<IdentityKey>().is_err());
        assert!("A|B|Q|False|X".parse::<IdentityKey>().is_err());
        assert!("".parse::<IdentityKey>().is_err());
    }

    #[test]
    fn test_lookup_forms() {
        let key = IdentityKey::new("A", "B", AbilityKind::W);
        assert_eq!(key.lookup_forms(), vec!["A|B|W", "A|B|W|False"]);

        let active = key.clone().with_passive(false);
        assert_eq!(active.lookup_forms(), vec!["A|B|W|False", "A|B|W"]);

        let passive = key.with_passive(true);
        assert_eq!(passive.lookup_forms(), vec!["A|B|W|True"]);
    }

    #[test]
    fn test_lookup_forms_agree_with_loose_match() {
        let keys = ["A|B|W", "A|B|W|False", "A|B|W|True"]
            .map(|text| text.parse::<IdentityKey>().unwrap());

        for key in &keys {
            for other in &keys {
                let by_forms = key.lookup_forms().contains(&other.canonical());
                assert_eq!(by_forms, key.matches_loosely(other), "{key} vs {other}");
            }
        }
    }

    #[test]
    fn test_empty_reference_id_round_trips() {
        let key = IdentityKey::new("", "B", AbilityKind::Q).with_passive(false);
        assert_eq!(key.canonical(), "|B|Q|False");
        assert_eq!(key.canonical().parse::<IdentityKey>().unwrap(), key);
    }
}
