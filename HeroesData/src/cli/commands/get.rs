//! CLI command for resolving a single record

use std::path::Path;

use serde::Serialize;

use super::KeyArg;
use crate::cli::GlobalArgs;
use crate::document::{AssembleOptions, DataDocument, Entity};
use crate::localization::GameStringDocument;

/// Look up one record and print it as pretty JSON.
pub fn execute<T: Entity + Serialize>(
    data: &Path,
    key: &str,
    by: KeyArg,
    options: AssembleOptions,
    globals: &GlobalArgs,
) -> anyhow::Result<()> {
    let options = match globals.locale {
        Some(locale) => options.with_locale(locale),
        None => options,
    };
    let mut document = DataDocument::<T>::from_path(data)?.with_options(options);

    if let Some(path) = &globals.gamestrings {
        let strings = GameStringDocument::from_path(path, globals.locale)?;
        document = document.with_game_strings(strings);
    }

    let entity = match by.alternate() {
        None => document.get_by_id(key)?,
        Some(alternate) => document.get_by(alternate, key)?,
    };

    println!("{}", serde_json::to_string_pretty(&entity)?);
    Ok(())
}
