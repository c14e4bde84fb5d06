//! Overlay of game strings onto assembled entities
//!
//! Every field update is a plain overwrite: a fragment that is present
//! replaces the field, a missing fragment leaves it alone. Applying the same
//! document twice therefore yields the same entity as applying it once.

use super::game_strings::GameStringDocument;
use crate::identity::IdentityKey;
use crate::models::{
    AbilityTalentTooltip, Announcer, Banner, Boost, Bundle, CollectionInfo, Emoticon, EmoticonPack,
    Hero, HeroSkin, LootChest, Matchaward, Mount, PortraitPack, RewardPortrait, Spray, Talent,
    TooltipDescription, TypeDescription, Unit, VoiceLine,
};

/// Category names used under `gamestrings`.
pub mod categories {
    pub const UNIT: &str = "unit";
    pub const ABILITY_TALENT: &str = "abiltalent";
    pub const ANNOUNCER: &str = "announcer";
    pub const BANNER: &str = "banner";
    pub const BOOST: &str = "boost";
    pub const BUNDLE: &str = "bundle";
    pub const EMOTICON: &str = "emoticon";
    pub const EMOTICON_PACK: &str = "emoticonpack";
    pub const LOOT_CHEST: &str = "lootchest";
    pub const MATCH_AWARD: &str = "award";
    pub const MOUNT: &str = "mount";
    pub const PORTRAIT_PACK: &str = "portrait";
    pub const REWARD_PORTRAIT: &str = "rewardportrait";
    pub const HERO_SKIN: &str = "heroskin";
    pub const SPRAY: &str = "spray";
    pub const TYPE_DESCRIPTION: &str = "typedescription";
    pub const VOICE_LINE: &str = "voiceline";
}

use categories as cat;

/// An entity that game strings can be overlaid onto.
pub trait Localize {
    /// Replace text fields with the matching fragments of `strings`.
    fn localize(&mut self, strings: &GameStringDocument);
}

macro_rules! localize_with {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Localize for $ty {
                fn localize(&mut self, strings: &GameStringDocument) {
                    strings.$method(self);
                }
            }
        )*
    };
}

localize_with! {
    Hero => update_hero,
    Unit => update_unit,
    Announcer => update_announcer,
    Banner => update_banner,
    Boost => update_boost,
    Bundle => update_bundle,
    Emoticon => update_emoticon,
    EmoticonPack => update_emoticon_pack,
    LootChest => update_loot_chest,
    Matchaward => update_matchaward,
    Mount => update_mount,
    PortraitPack => update_portrait_pack,
    RewardPortrait => update_reward_portrait,
    HeroSkin => update_hero_skin,
    Spray => update_spray,
    TypeDescription => update_type_description,
    VoiceLine => update_voice_line,
}

impl GameStringDocument {
    /// Overlay this document onto any entity.
    pub fn apply<T: Localize + ?Sized>(&self, entity: &mut T) {
        entity.localize(self);
    }

    // -------------------------------------------------------------------------
    // Heroes and units
    // -------------------------------------------------------------------------

    /// Overlay a hero, its abilities, talents and hero units.
    pub fn update_hero(&self, hero: &mut Hero) {
        self.update_unit(&mut hero.unit);

        let id = hero.unit.id.as_str();
        self.replace(&mut hero.difficulty, cat::UNIT, "difficulty", id);
        self.replace(&mut hero.expanded_role, cat::UNIT, "expandedrole", id);
        self.replace(&mut hero.search_text, cat::UNIT, "searchtext", id);
        self.replace(&mut hero.title, cat::UNIT, "title", id);
        self.replace(&mut hero.hero_type, cat::UNIT, "type", id);
        self.replace_rich(&mut hero.info_text, cat::UNIT, "infotext", id);

        if let Some(roles) = self.text(cat::UNIT, "role", id) {
            hero.roles = roles
                .split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(str::to_owned)
                .collect();
        }

        for talent in &mut hero.talents {
            self.update_talent(talent);
        }

        for hero_unit in &mut hero.hero_units {
            self.update_hero(hero_unit);
        }
    }

    /// Overlay a unit and its abilities (sub-abilities included).
    pub fn update_unit(&self, unit: &mut Unit) {
        let id = unit.id.as_str();
        self.replace(&mut unit.name, cat::UNIT, "name", id);
        self.replace_rich(&mut unit.description, cat::UNIT, "description", id);
        self.replace(&mut unit.damage_type, cat::UNIT, "damagetype", id);

        if let Some(life) = &mut unit.life {
            self.replace(&mut life.life_type, cat::UNIT, "lifetype", id);
        }
        if let Some(shield) = &mut unit.shield {
            self.replace(&mut shield.shield_type, cat::UNIT, "shieldtype", id);
        }
        if let Some(energy) = &mut unit.energy {
            self.replace(&mut energy.energy_type, cat::UNIT, "energytype", id);
        }

        for ability in &mut unit.abilities {
            self.update_ability_talent(&ability.key, &mut ability.name, &mut ability.tooltip);
        }
    }

    fn update_talent(&self, talent: &mut Talent) {
        self.update_ability_talent(&talent.key, &mut talent.name, &mut talent.tooltip);
    }

    /// Ability and talent fragments are keyed by identity, tried in each of
    /// the key's lookup forms.
    fn update_ability_talent(
        &self,
        key: &IdentityKey,
        name: &mut Option<String>,
        tooltip: &mut AbilityTalentTooltip,
    ) {
        let forms = key.lookup_forms();
        let find = |field: &str| {
            forms
                .iter()
                .find_map(|form| self.text(cat::ABILITY_TALENT, field, form))
        };

        if let Some(text) = find("name") {
            *name = Some(text.to_string());
        }

        let rich = [
            ("short", &mut tooltip.short),
            ("full", &mut tooltip.full),
            ("cooldown", &mut tooltip.cooldown),
            ("energy", &mut tooltip.energy),
            ("life", &mut tooltip.life),
        ];
        for (field, target) in rich {
            if let Some(text) = find(field) {
                *target = Some(self.description(text));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Collection entities
    // -------------------------------------------------------------------------

    pub fn update_announcer(&self, announcer: &mut Announcer) {
        self.update_info(&mut announcer.info, cat::ANNOUNCER, &announcer.id);
    }

    pub fn update_banner(&self, banner: &mut Banner) {
        self.update_info(&mut banner.info, cat::BANNER, &banner.id);
    }

    pub fn update_boost(&self, boost: &mut Boost) {
        self.update_info(&mut boost.info, cat::BOOST, &boost.id);
    }

    pub fn update_bundle(&self, bundle: &mut Bundle) {
        self.update_info(&mut bundle.info, cat::BUNDLE, &bundle.id);
    }

    /// Aliases are stored as one space-separated fragment.
    pub fn update_emoticon(&self, emoticon: &mut Emoticon) {
        let id = emoticon.id.as_str();
        self.update_info(&mut emoticon.info, cat::EMOTICON, id);
        self.replace(&mut emoticon.expression, cat::EMOTICON, "expression", id);
        self.replace(&mut emoticon.search_text, cat::EMOTICON, "searchtext", id);

        if let Some(aliases) = self.text(cat::EMOTICON, "aliases", id) {
            emoticon.aliases = aliases.split_whitespace().map(str::to_owned).collect();
        }
    }

    pub fn update_emoticon_pack(&self, pack: &mut EmoticonPack) {
        self.update_info(&mut pack.info, cat::EMOTICON_PACK, &pack.id);
    }

    pub fn update_loot_chest(&self, chest: &mut LootChest) {
        self.update_info(&mut chest.info, cat::LOOT_CHEST, &chest.id);
    }

    pub fn update_matchaward(&self, award: &mut Matchaward) {
        self.update_info(&mut award.info, cat::MATCH_AWARD, &award.id);
    }

    pub fn update_mount(&self, mount: &mut Mount) {
        let id = mount.id.as_str();
        self.update_info(&mut mount.info, cat::MOUNT, id);
        self.replace_rich(&mut mount.info_text, cat::MOUNT, "infotext", id);
        self.replace(&mut mount.search_text, cat::MOUNT, "searchtext", id);
    }

    pub fn update_portrait_pack(&self, pack: &mut PortraitPack) {
        self.update_info(&mut pack.info, cat::PORTRAIT_PACK, &pack.id);
    }

    pub fn update_reward_portrait(&self, portrait: &mut RewardPortrait) {
        let id = portrait.id.as_str();
        self.update_info(&mut portrait.info, cat::REWARD_PORTRAIT, id);
        self.replace_rich(
            &mut portrait.description_unearned,
            cat::REWARD_PORTRAIT,
            "descriptionunearned",
            id,
        );
    }

    pub fn update_hero_skin(&self, skin: &mut HeroSkin) {
        let id = skin.id.as_str();
        self.update_info(&mut skin.info, cat::HERO_SKIN, id);
        self.replace_rich(&mut skin.info_text, cat::HERO_SKIN, "infotext", id);
        self.replace(&mut skin.search_text, cat::HERO_SKIN, "searchtext", id);
    }

    pub fn update_spray(&self, spray: &mut Spray) {
        let id = spray.id.as_str();
        self.update_info(&mut spray.info, cat::SPRAY, id);
        self.replace(&mut spray.search_text, cat::SPRAY, "searchtext", id);
    }

    pub fn update_type_description(&self, description: &mut TypeDescription) {
        self.update_info(&mut description.info, cat::TYPE_DESCRIPTION, &description.id);
    }

    pub fn update_voice_line(&self, voice_line: &mut VoiceLine) {
        self.update_info(&mut voice_line.info, cat::VOICE_LINE, &voice_line.id);
    }

    fn update_info(&self, info: &mut CollectionInfo, category: &str, id: &str) {
        self.replace(&mut info.name, category, "name", id);
        self.replace(&mut info.sort_name, category, "sortname", id);
        self.replace_rich(&mut info.description, category, "description", id);
    }

    // -------------------------------------------------------------------------
    // Field helpers
    // -------------------------------------------------------------------------

    fn replace(&self, target: &mut Option<String>, category: &str, field: &str, key: &str) {
        if let Some(text) = self.text(category, field, key) {
            *target = Some(text.to_string());
        }
    }

    fn replace_rich(
        &self,
        target: &mut Option<TooltipDescription>,
        category: &str,
        field: &str,
        key: &str,
    ) {
        if let Some(text) = self.text(category, field, key) {
            *target = Some(self.description(text));
        }
    }

    fn description(&self, text: &str) -> TooltipDescription {
        TooltipDescription::new(text, self.locale())
    }
}
