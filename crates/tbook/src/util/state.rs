//! Model load/persist around a single command invocation

use anyhow::Result;
use std::path::{Path, PathBuf};
use teambook_core::config::{resolve_config, ConfigOverrides};
use teambook_core::home::get_home_dir;
use teambook_core::io::store::{data_file_path, load_address_book, save_address_book};
use teambook_core::Model;
use tracing::debug;

/// Load the model from the configured data file.
///
/// Returns the model together with the resolved path so mutating
/// commands can persist back to the same place.
pub fn load_model() -> Result<(Model, PathBuf)> {
    let home_dir = get_home_dir()?;
    let config = resolve_config(&ConfigOverrides::default(), &home_dir);
    let path = config
        .core
        .data_file
        .unwrap_or_else(|| data_file_path(&home_dir));

    debug!(path = %path.display(), "loading address book");
    let book = load_address_book(&path)?;
    Ok((Model::new(book), path))
}

/// Persist the model back to its data file.
pub fn persist_model(model: &Model, path: &Path) -> Result<()> {
    save_address_book(path, model.address_book())?;
    Ok(())
}
