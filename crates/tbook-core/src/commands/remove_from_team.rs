//! Batch removal of persons from their teams

use crate::commands::util;
use crate::commands::{CommandError, CommandResult};
use crate::model::{Index, Model, PersonFilter};
use crate::schema::Team;
use tracing::debug;

/// Remove one or more displayed persons from their current teams.
///
/// Targets are 1-based display indices; duplicates are allowed and
/// order determines message order. The batch is all-or-nothing: if any
/// target is unassigned, or any target fails to resolve against the
/// store, nothing is mutated.
///
/// Two command values are equal iff their index sequences are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveFromTeam {
    indices: Vec<Index>,
}

impl RemoveFromTeam {
    /// Create a command targeting the given display indices.
    #[must_use]
    pub fn new(indices: Vec<Index>) -> Self {
        Self { indices }
    }

    /// Validate all targets, then remove each from its team.
    ///
    /// Validation pass: every index must resolve, and every resolved
    /// person must currently be on a team; otherwise the whole batch
    /// fails with the per-person messages newline-joined.
    ///
    /// Mutation pass: every (person, team) pair is resolved against the
    /// pre-mutation view before any mutation is applied, so a
    /// consistency fault (`TeamNotFound`, `PersonNotInTeam`) can never
    /// leave earlier batch entries already mutated.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let mut failures = Vec::new();
        for &index in &self.indices {
            let person = util::target_person(model, index)?;
            if person.is_unassigned() {
                failures.push(format!("Person {} is currently not in a team", person.email));
            }
        }

        if !failures.is_empty() {
            return Err(CommandError::NotInAnyTeam(failures.join("\n")));
        }

        // Resolve the whole batch before touching the model.
        let mut planned = Vec::with_capacity(self.indices.len());
        for &index in &self.indices {
            let person = util::target_person(model, index)?;
            let team = util::validate_team_exists(model, &person.team_name)?;
            util::validate_membership(team, &person)?;
            planned.push(person);
        }

        let mut lines = Vec::with_capacity(planned.len());
        for person in planned {
            let team_name = person.team_name.clone();
            model.remove_person_from_team(&person, &team_name);
            let updated = person.with_team(Team::NONE);
            model.set_person(&person, updated.clone());
            debug!(person = %updated.email, team = %team_name, "removed person from team");
            lines.push(format!("Person {updated} removed from team {team_name}"));
        }
        model.update_filter(PersonFilter::All);

        Ok(CommandResult::new(lines.join("\n")))
    }
}
