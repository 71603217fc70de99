//! Shared validation helpers for team commands

use crate::commands::CommandError;
use crate::model::{Index, Model};
use crate::schema::{Person, Team};

/// Resolve a display index against the current filtered view.
///
/// Returns an owned copy of the person so callers can plan mutations
/// without holding a borrow on the model.
pub fn target_person(model: &Model, index: Index) -> Result<Person, CommandError> {
    model
        .person_at(index)
        .cloned()
        .ok_or(CommandError::IndexOutOfRange {
            index: index.one_based(),
            size: model.filtered_len(),
        })
}

/// Look up the team a person's team name points at.
///
/// The name is model-owned, so absence is a consistency fault, not a
/// user error.
pub fn validate_team_exists<'a>(
    model: &'a Model,
    team_name: &str,
) -> Result<&'a Team, CommandError> {
    model.team(team_name).ok_or_else(|| CommandError::TeamNotFound {
        team: team_name.to_string(),
    })
}

/// Assert that the team's member list actually contains the person.
pub fn validate_membership(team: &Team, person: &Person) -> Result<(), CommandError> {
    if team.contains(person) {
        Ok(())
    } else {
        Err(CommandError::PersonNotInTeam {
            person: person.email.clone(),
            team: team.name.clone(),
        })
    }
}
