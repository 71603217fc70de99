//! Configuration resolution
//!
//! Resolves configuration from multiple sources with priority:
//! 1. Command-line flags (passed as overrides)
//! 2. Environment variables
//! 3. Global config (`~/.config/tbook/config.toml`)
//! 4. Defaults

mod discovery;
mod types;

pub use discovery::{resolve_config, ConfigError, ConfigOverrides};
pub use types::{Config, CoreConfig, DisplayConfig, OutputFormat};
