//! Schema types for the teambook address book
//!
//! This module contains the data structures that map to the on-disk JSON
//! document. All types preserve unknown fields for forward compatibility.

mod address_book;
pub mod person;
pub mod team;

pub use address_book::AddressBook;
pub use person::Person;
pub use team::Team;
