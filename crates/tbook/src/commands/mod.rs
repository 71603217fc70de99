//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};

mod add;
mod clear;
mod delete;
mod edit;
mod export;
mod find;
mod list;
mod team;

/// tbook - command-driven address book with teams
#[derive(Parser, Debug)]
#[command(
    name = "tbook",
    version,
    about = "Command-driven address book with teams",
    long_about = "A CLI address book storing contacts in ~/.teambook/addressbook.json, \
                  with commands to add, edit, and organize contacts into teams"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a person to the address book
    Add(add::AddArgs),

    /// Edit a displayed person's fields
    Edit(edit::EditArgs),

    /// Delete displayed persons by index
    Delete(delete::DeleteArgs),

    /// List all persons
    List(list::ListArgs),

    /// Find persons whose name contains any keyword
    Find(find::FindArgs),

    /// Manage teams and team membership
    Team(team::TeamArgs),

    /// Export the address book to a file
    Export(export::ExportArgs),

    /// Clear the entire address book
    Clear(clear::ClearArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Add(args) => add::execute(args),
            Commands::Edit(args) => edit::execute(args),
            Commands::Delete(args) => delete::execute(args),
            Commands::List(args) => list::execute(args),
            Commands::Find(args) => find::execute(args),
            Commands::Team(args) => team::execute(args),
            Commands::Export(args) => export::execute(args),
            Commands::Clear(args) => clear::execute(args),
        }
    }
}
