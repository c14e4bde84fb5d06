//! Command execution implementations

use super::{Commands, EntityKind, get, list, strings};
use crate::cli::GlobalArgs;
use crate::document::AssembleOptions;
use crate::models::{
    Announcer, Banner, Boost, Bundle, Emoticon, EmoticonPack, Hero, HeroSkin, LootChest,
    Matchaward, Mount, PortraitPack, RewardPortrait, Spray, TypeDescription, Unit, VoiceLine,
};

/// Run `$body` with `$T` bound to the model type of `$kind`.
macro_rules! with_entity {
    ($kind:expr, $T:ident => $body:expr) => {
        match $kind {
            EntityKind::Hero => { type $T = Hero; $body }
            EntityKind::Unit => { type $T = Unit; $body }
            EntityKind::Announcer => { type $T = Announcer; $body }
            EntityKind::Banner => { type $T = Banner; $body }
            EntityKind::Boost => { type $T = Boost; $body }
            EntityKind::Bundle => { type $T = Bundle; $body }
            EntityKind::Emoticon => { type $T = Emoticon; $body }
            EntityKind::EmoticonPack => { type $T = EmoticonPack; $body }
            EntityKind::LootChest => { type $T = LootChest; $body }
            EntityKind::Matchaward => { type $T = Matchaward; $body }
            EntityKind::Mount => { type $T = Mount; $body }
            EntityKind::PortraitPack => { type $T = PortraitPack; $body }
            EntityKind::RewardPortrait => { type $T = RewardPortrait; $body }
            EntityKind::HeroSkin => { type $T = HeroSkin; $body }
            EntityKind::Spray => { type $T = Spray; $body }
            EntityKind::TypeDescription => { type $T = TypeDescription; $body }
            EntityKind::VoiceLine => { type $T = VoiceLine; $body }
        }
    };
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if a document cannot be read or a lookup fails.
    pub fn execute(&self, globals: &GlobalArgs) -> anyhow::Result<()> {
        match self {
            Commands::Get {
                kind,
                data,
                key,
                by,
                minimal,
            } => {
                let options = if *minimal {
                    AssembleOptions::minimal()
                } else {
                    AssembleOptions::default()
                };
                with_entity!(*kind, T => get::execute::<T>(data, key, *by, options, globals))
            }
            Commands::List { kind, data } => {
                with_entity!(*kind, T => list::execute::<T>(data, globals))
            }
            Commands::Strings {
                source,
                category,
                field,
                key,
            } => strings::execute(source, category, field, key, globals),
        }
    }
}
