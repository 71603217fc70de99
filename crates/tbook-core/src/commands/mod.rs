//! Command core: validation and mutation logic over the [`Model`]
//!
//! Each command is a plain value holding its parsed arguments; `execute`
//! takes the model by reference, validates preconditions against it,
//! mutates through the model API, and returns a user-facing
//! [`CommandResult`] or a typed [`CommandError`]. No validation failure
//! leaves the model partially mutated.
//!
//! [`Model`]: crate::Model

mod error;
mod export;
mod remove_from_team;
pub mod util;

pub use error::CommandError;
pub use export::{Export, DEFAULT_EXPORT_FILE};
pub use remove_from_team::RemoveFromTeam;

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Feedback message shown to the user
    pub feedback: String,
}

impl CommandResult {
    /// Wrap a feedback message.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self { feedback: feedback.into() }
    }
}
