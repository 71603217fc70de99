//! Address book load/save at the default data location

use crate::io::atomic::write_atomic;
use crate::io::error::StoreError;
use crate::schema::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under the home directory holding teambook data.
pub const DATA_DIR: &str = ".teambook";

/// Default address book file name.
pub const DATA_FILE: &str = "addressbook.json";

/// Default data file path for a given home directory.
#[must_use]
pub fn data_file_path(home_dir: &Path) -> PathBuf {
    home_dir.join(DATA_DIR).join(DATA_FILE)
}

/// Load the address book from `path`.
///
/// A missing file yields an empty book; a present but unparseable file
/// is an error carrying the path.
pub fn load_address_book(path: &Path) -> Result<AddressBook, StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "no address book on disk, starting empty");
        return Ok(AddressBook::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Save the address book to `path`, creating parent directories as
/// needed and writing atomically.
pub fn save_address_book(path: &Path, book: &AddressBook) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(book).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    write_atomic(path, json.as_bytes())?;
    debug!(path = %path.display(), persons = book.persons.len(), "saved address book");
    Ok(())
}
