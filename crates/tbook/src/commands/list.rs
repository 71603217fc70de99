//! List command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;
use teambook_core::Model;

use crate::util::state::load_model;

/// List all persons
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs) -> Result<()> {
    let (model, _path) = load_model()?;
    print_persons(&model, args.json);
    Ok(())
}

/// Print the model's filtered persons, numbered from 1.
pub fn print_persons(model: &Model, as_json: bool) {
    let persons = model.filtered_persons();

    if as_json {
        let output = json!({
            "persons": persons.iter().map(|p| json!({
                "name": p.name,
                "phone": p.phone,
                "email": p.email,
                "github": p.github,
                "teamName": p.team_name,
            })).collect::<Vec<_>>()
        });
        match serde_json::to_string_pretty(&output) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => eprintln!("Warning: failed to render JSON output: {e}"),
        }
    } else if persons.is_empty() {
        println!("No persons listed");
    } else {
        for (i, person) in persons.iter().enumerate() {
            let number = i + 1;
            println!("{number}. {person}");
        }
    }
}
