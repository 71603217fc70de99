//! Core types and logic for teambook (tbook)
//!
//! This crate provides the data model, command core, and JSON persistence
//! for the teambook address book: immutable `Person` records, mutable
//! `Team` entities, the in-memory `Model` store, and the command
//! implementations that mutate it.
//!
//! All schema types are designed to:
//! - Preserve unknown fields for forward compatibility
//! - Use proper serde configuration for camelCase ↔ snake_case
//! - Support round-trip serialization without data loss

pub mod commands;
pub mod config;
pub mod home;
pub mod io;
pub mod logging;
pub mod model;
pub mod schema;

pub use model::{Index, Model, PersonFilter};
pub use schema::{AddressBook, Person, Team};
