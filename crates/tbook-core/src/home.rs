//! Canonical home directory resolution for teambook
//!
//! Single source of truth for where `.teambook/` and the global config
//! live. Supports custom deployments and testing via the `TBOOK_HOME`
//! environment variable.
//!
//! # Precedence
//!
//! 1. `TBOOK_HOME` environment variable (if set and non-empty)
//! 2. `dirs::home_dir()` platform default
//!
//! Integration tests MUST use `TBOOK_HOME` to override the home
//! directory rather than `HOME`, which `dirs::home_dir()` ignores on
//! Windows.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Get the home directory for teambook operations.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("TBOOK_HOME") {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))
}
