//! Person record schema

use crate::schema::team::Team;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single contact record.
///
/// `Person` is an immutable value: field changes go through whole-object
/// replacement in the owning [`crate::Model`] via `set_person`, never
/// through in-place mutation. Equality is value-based over all fields.
///
/// # Serialisation
///
/// Stored in `addressbook.json` with camelCase keys. `teamName` defaults
/// to the [`Team::NONE`] sentinel when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Display name
    pub name: String,

    /// Phone number (digits, 3 or more)
    pub phone: String,

    /// Email address
    pub email: String,

    /// Source-control handle (e.g. a GitHub username)
    pub github: String,

    /// Name of the team this person belongs to; `Team::NONE` when unassigned
    #[serde(default = "Team::none_name")]
    pub team_name: String,

    /// Unknown fields for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Person {
    /// Create a new person with the given fields.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        github: impl Into<String>,
        team_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            github: github.into(),
            team_name: team_name.into(),
            unknown_fields: HashMap::new(),
        }
    }

    /// Rebuild this person with a different team name, preserving all
    /// other fields. This is the only way a person's team changes.
    #[must_use]
    pub fn with_team(&self, team_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            ..self.clone()
        }
    }

    /// Whether this person is currently unassigned (sentinel team name).
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        Team::is_none_name(&self.team_name)
    }

    /// Validate field constraints.
    ///
    /// Returns a human-readable message for the first violated constraint.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be blank".to_string());
        }
        if self.phone.len() < 3 || !self.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err("Phone must contain at least 3 digits and nothing else".to_string());
        }
        if !self.email.contains('@') {
            return Err(format!("Email '{}' is not a valid address", self.email));
        }
        if self.github.trim().is_empty() {
            return Err("Github handle must not be blank".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Github: {}; Team: {}",
            self.name, self.phone, self.email, self.github, self.team_name
        )
    }
}
