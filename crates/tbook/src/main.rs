//! tbook - command-driven address book with teams
//!
//! A CLI over a flat JSON store at `~/.teambook/addressbook.json`,
//! providing person CRUD, team membership, and export commands.

use clap::Parser;

mod commands;
mod util;

use commands::Cli;

fn main() {
    teambook_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
