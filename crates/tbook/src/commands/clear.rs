//! Clear command implementation

use anyhow::Result;
use clap::Args;

use crate::util::state::{load_model, persist_model};

/// Clear the entire address book
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

/// Execute the clear command
pub fn execute(args: ClearArgs) -> Result<()> {
    if !args.yes {
        anyhow::bail!("Clearing removes every person and team; re-run with --yes to confirm");
    }

    let (mut model, path) = load_model()?;
    model.clear();
    persist_model(&model, &path)?;

    println!("Address book has been cleared!");
    Ok(())
}
