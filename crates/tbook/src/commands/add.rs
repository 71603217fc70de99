//! Add command implementation

use anyhow::Result;
use clap::Args;
use teambook_core::commands::CommandError;
use teambook_core::{Person, Team};

use crate::util::state::{load_model, persist_model};

/// Add a person to the address book
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Person's name
    name: String,

    /// Phone number (digits, 3 or more)
    #[arg(long)]
    phone: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// GitHub username
    #[arg(long)]
    github: String,

    /// Assign to a team on creation (team must exist)
    #[arg(long)]
    team: Option<String>,
}

/// Execute the add command
pub fn execute(args: AddArgs) -> Result<()> {
    let (mut model, path) = load_model()?;

    let team_name = args.team.unwrap_or_else(Team::none_name);
    let person = Person::new(args.name, args.phone, args.email, args.github, team_name.clone());
    person.validate().map_err(CommandError::InvalidField)?;

    if model.contains_person(&person) {
        return Err(CommandError::DuplicatePerson.into());
    }

    if !Team::is_none_name(&team_name) {
        if !model.contains_team(&team_name) {
            anyhow::bail!("Team '{team_name}' not found; create it with 'tbook team create'");
        }
        model.add_person_to_team(&person, &team_name);
    }

    model.add_person(person.clone());
    persist_model(&model, &path)?;

    println!("New person added: {person}");
    Ok(())
}
