//! Team entity schema

use crate::schema::person::Person;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named group of persons.
///
/// Unlike [`Person`], a team is a mutable entity: membership changes
/// happen in place through the owning [`crate::Model`]. Member ordering
/// carries no meaning.
///
/// Invariants (enforced by the `Model` mutation API, not by this type):
/// - a person appears in at most one team's member list
/// - if a person's `team_name` is not [`Team::NONE`], the team it names
///   contains that person by value equality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team name (unique key within the address book)
    pub name: String,

    /// Unix timestamp in milliseconds when the team was created
    pub created_at: u64,

    /// Members of this team, by value
    #[serde(default)]
    pub members: Vec<Person>,

    /// Unknown fields for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Team {
    /// Reserved team name meaning "unassigned".
    pub const NONE: &'static str = "NONE";

    /// Whether `name` is the "no team" sentinel.
    #[must_use]
    pub fn is_none_name(name: &str) -> bool {
        name == Self::NONE
    }

    /// The sentinel as an owned string (serde default for `Person::team_name`).
    #[must_use]
    pub fn none_name() -> String {
        Self::NONE.to_string()
    }

    /// Create an empty team.
    pub fn new(name: impl Into<String>, created_at: u64) -> Self {
        Self {
            name: name.into(),
            created_at,
            members: Vec::new(),
            unknown_fields: HashMap::new(),
        }
    }

    /// Whether `person` is a member of this team, by value equality.
    #[must_use]
    pub fn contains(&self, person: &Person) -> bool {
        self.members.contains(person)
    }

    /// Add a member. Duplicate adds are ignored.
    pub fn add_member(&mut self, person: Person) {
        if !self.contains(&person) {
            self.members.push(person);
        }
    }

    /// Remove a member by value equality. Removing a non-member is a no-op.
    pub fn remove_member(&mut self, person: &Person) {
        self.members.retain(|m| m != person);
    }
}
