//! Edit command implementation

use anyhow::Result;
use clap::Args;
use teambook_core::commands::{util, CommandError};
use teambook_core::Person;

use crate::util::index_from_arg;
use crate::util::state::{load_model, persist_model};

/// Edit a displayed person's fields
#[derive(Args, Debug)]
pub struct EditArgs {
    /// 1-based index of the person to edit
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    index: u64,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New phone number
    #[arg(long)]
    phone: Option<String>,

    /// New email address
    #[arg(long)]
    email: Option<String>,

    /// New GitHub username
    #[arg(long)]
    github: Option<String>,
}

/// Execute the edit command
pub fn execute(args: EditArgs) -> Result<()> {
    if args.name.is_none() && args.phone.is_none() && args.email.is_none() && args.github.is_none()
    {
        anyhow::bail!("At least one field to edit must be provided");
    }

    let (mut model, path) = load_model()?;

    let index = index_from_arg(args.index);
    let person = util::target_person(&model, index)?;

    // Team assignment is not editable here; team commands own it.
    // Unknown fields carry over so edits never drop data.
    let updated = Person {
        name: args.name.unwrap_or_else(|| person.name.clone()),
        phone: args.phone.unwrap_or_else(|| person.phone.clone()),
        email: args.email.unwrap_or_else(|| person.email.clone()),
        github: args.github.unwrap_or_else(|| person.github.clone()),
        team_name: person.team_name.clone(),
        unknown_fields: person.unknown_fields.clone(),
    };
    updated.validate().map_err(CommandError::InvalidField)?;

    if updated != person && model.contains_person(&updated) {
        return Err(CommandError::DuplicatePerson.into());
    }

    model.set_person(&person, updated.clone());
    persist_model(&model, &path)?;

    println!("Edited person: {updated}");
    Ok(())
}
