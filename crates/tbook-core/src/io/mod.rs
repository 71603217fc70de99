//! Atomic file I/O and address book persistence

pub mod atomic;
pub mod error;
pub mod store;

pub use error::StoreError;
