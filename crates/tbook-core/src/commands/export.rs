//! Export of the address book to a JSON file

use crate::commands::{CommandError, CommandResult};
use crate::io::atomic::write_atomic;
use crate::model::Model;
use std::path::PathBuf;
use tracing::debug;

/// File name used when the export target is a directory.
pub const DEFAULT_EXPORT_FILE: &str = "exported_addressbook.json";

/// Serialize the model's address book to a target path.
///
/// A target naming an existing directory gets [`DEFAULT_EXPORT_FILE`]
/// appended. The write is atomic (temp file then rename), so a failed
/// export never truncates an existing file. The model is not mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    target: String,
}

impl Export {
    /// Create an export command for the given target path.
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }

    /// Write the serialized address book, reporting the resolved path.
    pub fn execute(&self, model: &Model) -> Result<CommandResult, CommandError> {
        if self.target.contains('\0') {
            return Err(CommandError::ExportFailed(format!(
                "path contains an illegal character: {:?}",
                self.target
            )));
        }

        let mut path = PathBuf::from(&self.target);
        if path.is_dir() {
            path.push(DEFAULT_EXPORT_FILE);
        }

        let json = serde_json::to_string_pretty(model.address_book())
            .map_err(|e| CommandError::ExportFailed(e.to_string()))?;

        write_atomic(&path, json.as_bytes())
            .map_err(|e| CommandError::ExportFailed(e.to_string()))?;

        debug!(path = %path.display(), persons = model.persons().len(), "exported address book");
        Ok(CommandResult::new(format!(
            "Exported address book to {}",
            path.display()
        )))
    }
}
