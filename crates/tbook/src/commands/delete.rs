//! Delete command implementation

use anyhow::Result;
use clap::Args;
use teambook_core::commands::util;

use crate::util::index_from_arg;
use crate::util::state::{load_model, persist_model};

/// Delete displayed persons by index
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// 1-based indices of the persons to delete
    #[arg(required = true, value_parser = clap::value_parser!(u64).range(1..))]
    indices: Vec<u64>,
}

/// Execute the delete command
pub fn execute(args: DeleteArgs) -> Result<()> {
    let (mut model, path) = load_model()?;

    // Resolve the whole batch before deleting anything
    let mut targets = Vec::with_capacity(args.indices.len());
    for &raw in &args.indices {
        targets.push(util::target_person(&model, index_from_arg(raw))?);
    }

    let mut lines = Vec::with_capacity(targets.len());
    for person in targets {
        model.remove_person(&person);
        lines.push(format!("Deleted person: {person}"));
    }
    persist_model(&model, &path)?;

    println!("{}", lines.join("\n"));
    Ok(())
}
