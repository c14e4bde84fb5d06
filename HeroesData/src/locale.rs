//! Game locales and locale resolution for game strings documents

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// A game locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Localization {
    #[default]
    EnUs,
    DeDe,
    EsEs,
    EsMx,
    FrFr,
    ItIt,
    KoKr,
    PlPl,
    PtBr,
    RuRu,
    ZhCn,
    ZhTw,
}

impl Localization {
    /// Locale used when nothing else resolves.
    pub const FALLBACK: Localization = Localization::EnUs;

    /// All supported locales.
    pub const ALL: [Localization; 12] = [
        Localization::EnUs,
        Localization::DeDe,
        Localization::EsEs,
        Localization::EsMx,
        Localization::FrFr,
        Localization::ItIt,
        Localization::KoKr,
        Localization::PlPl,
        Localization::PtBr,
        Localization::RuRu,
        Localization::ZhCn,
        Localization::ZhTw,
    ];

    /// Short tag as used in file names and `meta.locale` (e.g., "enus").
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Localization::EnUs => "enus",
            Localization::DeDe => "dede",
            Localization::EsEs => "eses",
            Localization::EsMx => "esmx",
            Localization::FrFr => "frfr",
            Localization::ItIt => "itit",
            Localization::KoKr => "kokr",
            Localization::PlPl => "plpl",
            Localization::PtBr => "ptbr",
            Localization::RuRu => "ruru",
            Localization::ZhCn => "zhcn",
            Localization::ZhTw => "zhtw",
        }
    }

    /// Parse a locale tag. Accepts "enUS", "en-US", "en_us" and friends.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|locale| locale.tag() == normalized)
    }

    /// Locale suffix of a game strings file name, e.g.
    /// `gamestrings_76003_kokr.json` -> `KoKr`.
    #[must_use]
    pub fn from_file_name(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        let suffix = stem.rsplit('_').next()?;
        Self::parse(suffix)
    }
}

impl fmt::Display for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Localization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::UnknownLocale(s.to_string()))
    }
}

/// Pick the locale for a game strings document.
///
/// Priority: explicit parameter, then `meta.locale` inside the document, then
/// the file name suffix, then [`Localization::FALLBACK`].
#[must_use]
pub fn resolve_locale(
    explicit: Option<Localization>,
    meta_locale: Option<&str>,
    file_name: Option<&Path>,
) -> Localization {
    if let Some(locale) = explicit {
        tracing::debug!("Using explicit locale {}", locale);
        return locale;
    }

    if let Some(locale) = meta_locale.and_then(Localization::parse) {
        tracing::debug!("Using document meta locale {}", locale);
        return locale;
    }

    if let Some(locale) = file_name.and_then(Localization::from_file_name) {
        tracing::debug!("Using file name locale {}", locale);
        return locale;
    }

    tracing::debug!("No locale resolved, falling back to {}", Localization::FALLBACK);
    Localization::FALLBACK
}
