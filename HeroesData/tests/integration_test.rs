use heroesdata::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const HERO_DATA: &str = r#"{
  "Abathur": {
    "hyperlinkId": "Abathur",
    "attributeId": "Abat",
    "unitId": "HeroAbathur",
    "name": "Abathur",
    "roles": ["Support"],
    "releaseDate": "2014-03-13",
    "abilities": {
      "basic": [
        { "abilityId": "AbathurSymbiote", "buttonId": "AbathurSymbiote", "abilityType": "Q", "name": "Symbiote",
          "shortTooltip": "Assist an ally" }
      ],
      "heroic": [
        { "abilityId": "AbathurUltimateEvolution", "buttonId": "UltimateEvolution", "abilityType": "Heroic" }
      ]
    },
    "subAbilities": [
      { "AbathurSymbiote|AbathurSymbiote|Q|False": {
          "basic": [
            { "abilityId": "AbathurSymbioteSpikeBurst", "buttonId": "SpikeBurst", "abilityType": "Q", "name": "Spike Burst" }
          ]
      } }
    ],
    "talents": {
      "level1": [
        { "talentTreeId": "AbathurMasteryPressurizedGlands", "abilityId": "AbathurSymbiote", "buttonId": "Glands",
          "abilityType": "W", "sort": 1, "name": "Pressurized Glands" }
      ]
    }
  },
  "Alarak": {
    "hyperlinkId": "Alarak",
    "attributeId": "Alar",
    "unitId": "HeroAlarak",
    "name": "Alarak"
  }
}"#;

const GAME_STRINGS: &str = r#"{
  "meta": { "version": "2.55.0.87306" },
  "gamestrings": {
    "unit": {
      "name": { "Abathur": "아바투르" },
      "title": { "Abathur": "진화 군주" }
    },
    "abiltalent": {
      "name": {
        "AbathurSymbiote|AbathurSymbiote|Q|False": "공생체",
        "AbathurSymbioteSpikeBurst|SpikeBurst|Q|False": "가시 폭발",
        "AbathurMasteryPressurizedGlands|Glands|W|False": "가압 분비샘"
      },
      "short": { "AbathurSymbiote|AbathurSymbiote|Q|False": "아군 지원" }
    }
  }
}"#;

fn write(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Route library logs through the test harness output.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_hero_lookup_from_file() {
    init_logging();
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "herodata_87306_enus.json", HERO_DATA);

    let heroes = HeroDataDocument::from_path(&path).unwrap();
    assert_eq!(heroes.count(), 2);
    assert_eq!(heroes.all_ids().collect::<Vec<_>>(), vec!["Abathur", "Alarak"]);

    let abathur = heroes.get_by_unit_id("HeroAbathur").unwrap();
    assert_eq!(abathur.id(), "Abathur");
    assert_eq!(abathur.unit.abilities.len(), 3);
    assert_eq!(abathur.talents.len(), 1);
    assert_eq!(abathur.release_date.map(|d| d.to_string()), Some("2014-03-13".to_string()));

    let alarak = heroes.try_get_by_attribute_id("Alar").unwrap().unwrap();
    assert_eq!(alarak.name(), Some("Alarak"));
}

#[test]
fn test_sub_abilities_link_to_parent() {
    init_logging();
    let heroes = HeroDataDocument::from_json(HERO_DATA).unwrap();
    let abathur = heroes.get_by_id("Abathur").unwrap();

    let parent = abathur
        .unit
        .find_ability(&"AbathurSymbiote|AbathurSymbiote|Q|False".parse().unwrap())
        .unwrap();
    let subs: Vec<&Ability> = abathur.unit.sub_abilities_of(&parent.key).collect();

    assert_eq!(subs.len(), 1);
    assert_eq!(
        subs[0].parent_link.as_ref().map(IdentityKey::canonical),
        Some(parent.key.canonical())
    );
}

#[test]
fn test_localized_lookup() {
    init_logging();
    let dir = tempdir().unwrap();
    let strings_path = write(dir.path(), "gamestrings_87306_kokr.json", GAME_STRINGS);

    let strings = GameStringDocument::from_path(&strings_path, None).unwrap();
    assert_eq!(strings.locale(), Localization::KoKr);
    assert_eq!(strings.version(), Some("2.55.0.87306"));

    let heroes = HeroDataDocument::from_json(HERO_DATA)
        .unwrap()
        .with_game_strings(strings);
    let abathur = heroes.get_by_hyperlink_id("Abathur").unwrap();

    assert_eq!(abathur.name(), Some("아바투르"));
    assert_eq!(abathur.title.as_deref(), Some("진화 군주"));

    let names: Vec<Option<&str>> = abathur.unit.abilities.iter().map(|a| a.name.as_deref()).collect();
    assert_eq!(names, vec![Some("공생체"), None, Some("가시 폭발")]);

    let short = abathur.unit.abilities[0].tooltip.short.as_ref().unwrap();
    assert_eq!(short.text, "아군 지원");
    assert_eq!(short.locale, Localization::KoKr);
    assert_eq!(abathur.talents[0].name.as_deref(), Some("가압 분비샘"));

    // Alarak has no fragments and keeps its source text.
    assert_eq!(heroes.get_by_id("Alarak").unwrap().name(), Some("Alarak"));
}

#[test]
fn test_locale_resolution_order() {
    init_logging();
    let dir = tempdir().unwrap();
    let with_meta = r#"{ "meta": { "locale": "frfr" }, "gamestrings": {} }"#;
    let path = write(dir.path(), "gamestrings_87306_dede.json", with_meta);

    let explicit = GameStringDocument::from_path(&path, Some(Localization::EsMx)).unwrap();
    assert_eq!(explicit.locale(), Localization::EsMx);

    let meta = GameStringDocument::from_path(&path, None).unwrap();
    assert_eq!(meta.locale(), Localization::FrFr);

    let path = write(dir.path(), "gamestrings_87306_dede_2.json", "{}");
    let fallback = GameStringDocument::from_path(&path, None).unwrap();
    assert_eq!(fallback.locale(), Localization::FALLBACK);

    let path = write(dir.path(), "gamestrings_87306_zhtw.json", "{}");
    let file_name = GameStringDocument::from_path(&path, None).unwrap();
    assert_eq!(file_name.locale(), Localization::ZhTw);
}

#[test]
fn test_overlay_twice_matches_once() {
    init_logging();
    let strings = GameStringDocument::from_json(GAME_STRINGS, None).unwrap();
    let heroes = HeroDataDocument::from_json(HERO_DATA).unwrap();

    let mut once = heroes.get_by_id("Abathur").unwrap();
    strings.update_hero(&mut once);
    let mut twice = once.clone();
    strings.update_hero(&mut twice);

    assert_eq!(once, twice);
}

#[test]
fn test_serialized_identity_keys() {
    init_logging();
    let heroes = HeroDataDocument::from_json(HERO_DATA).unwrap();
    let abathur = heroes.get_by_id("Abathur").unwrap();
    let json = serde_json::to_value(&abathur).unwrap();

    let key = &json["abilities"][0]["key"];
    assert_eq!(key, "AbathurSymbiote|AbathurSymbiote|Q|False");
}

#[test]
fn test_missing_file() {
    init_logging();
    let dir = tempdir().unwrap();
    let err = UnitDataDocument::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
