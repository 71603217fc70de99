//! Error types for command execution

use thiserror::Error;

/// Command execution errors
///
/// Every variant renders as a single human-readable message; none is
/// fatal to the process, and no variant is raised after the model has
/// been partially mutated.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A 1-based display index exceeds the current filtered view
    #[error("The person index provided is invalid: {index} (the list has {size} persons)")]
    IndexOutOfRange { index: usize, size: usize },

    /// A person's team name points at a team absent from the model.
    /// Indicates store corruption rather than user error.
    #[error("Team '{team}' not found in the address book")]
    TeamNotFound { team: String },

    /// A person's team name and the team's member list disagree.
    /// Indicates store corruption rather than user error.
    #[error("Person {person} is not in team {team}")]
    PersonNotInTeam { person: String, team: String },

    /// Batch precondition failure: one or more targets are unassigned.
    /// Carries the newline-joined per-person messages.
    #[error("{0}")]
    NotInAnyTeam(String),

    /// Export target path is invalid or unwritable
    #[error("Failed to export address book: {0}")]
    ExportFailed(String),

    /// An equal person already exists in the address book
    #[error("This person already exists in the address book")]
    DuplicatePerson,

    /// A team with this name already exists
    #[error("Team '{team}' already exists")]
    DuplicateTeam { team: String },

    /// Target person must leave their current team first
    #[error("Person {person} is already in team {team}; remove them from it first")]
    AlreadyInTeam { person: String, team: String },

    /// A person field failed validation
    #[error("{0}")]
    InvalidField(String),
}
