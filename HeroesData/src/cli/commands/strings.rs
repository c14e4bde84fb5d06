//! CLI command for reading game strings

use std::path::Path;

use crate::cli::GlobalArgs;
use crate::localization::GameStringDocument;

/// Print the fragment at `gamestrings.<category>.<field>.<key>`.
pub fn execute(
    source: &Path,
    category: &str,
    field: &str,
    key: &str,
    globals: &GlobalArgs,
) -> anyhow::Result<()> {
    let strings = GameStringDocument::from_path(source, globals.locale)?;

    if !globals.quiet {
        println!("Locale: {}", strings.locale());
        if let Some(version) = strings.version() {
            println!("Version: {version}");
        }
    }

    match strings.text(category, field, key) {
        Some(text) => {
            println!("{text}");
            Ok(())
        }
        None => anyhow::bail!("no game string at {category}.{field}.{key}"),
    }
}
