//! Find command implementation

use anyhow::Result;
use clap::Args;
use teambook_core::PersonFilter;

use crate::commands::list::print_persons;
use crate::util::state::load_model;

/// Find persons whose name contains any keyword
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Keywords to match against names, case-insensitively
    #[arg(required = true)]
    keywords: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the find command
pub fn execute(args: FindArgs) -> Result<()> {
    let (mut model, _path) = load_model()?;

    model.update_filter(PersonFilter::NameContainsAny(args.keywords));

    let count = model.filtered_len();
    print_persons(&model, args.json);
    if !args.json {
        println!("{count} persons listed!");
    }
    Ok(())
}
