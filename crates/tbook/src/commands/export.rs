//! Export command implementation

use anyhow::Result;
use clap::Args;
use teambook_core::commands::Export;

use crate::util::state::load_model;

/// Export the address book to a file
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Target file or directory (directories get exported_addressbook.json)
    target: String,
}

/// Execute the export command
pub fn execute(args: ExportArgs) -> Result<()> {
    let (model, _path) = load_model()?;

    let result = Export::new(args.target).execute(&model)?;
    println!("{}", result.feedback);
    Ok(())
}
