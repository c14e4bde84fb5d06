//! CLI command for listing record ids

use std::path::Path;

use crate::cli::GlobalArgs;
use crate::document::{DataDocument, Entity};

/// Print every primary id in document order.
pub fn execute<T: Entity>(data: &Path, globals: &GlobalArgs) -> anyhow::Result<()> {
    let document = DataDocument::<T>::from_path(data)?;

    for id in document.all_ids() {
        println!("{id}");
    }

    if !globals.quiet {
        println!();
        println!("{} {} records", document.count(), T::KIND);
    }

    Ok(())
}
