//! Address book document schema

use crate::schema::person::Person;
use crate::schema::team::Team;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The full serialized address book: every person and every team.
///
/// This is both the root of `addressbook.json` and the document the
/// `export` command writes; export output round-trips through the same
/// load path used at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBook {
    /// All contact records
    #[serde(default)]
    pub persons: Vec<Person>,

    /// All teams
    #[serde(default)]
    pub teams: Vec<Team>,

    /// Unknown fields for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
