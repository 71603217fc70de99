//! Configuration discovery and resolution

use super::types::{Config, OutputFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Command-line overrides for configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Override output format
    pub format: Option<OutputFormat>,
    /// Override data file path
    pub data_file: Option<PathBuf>,
}

/// Resolve configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Command-line overrides
/// 2. Environment variables (`TBOOK_FORMAT`)
/// 3. Global config (`<home>/.config/tbook/config.toml`)
/// 4. Defaults
pub fn resolve_config(overrides: &ConfigOverrides, home_dir: &Path) -> Config {
    let mut config = Config::default();

    let global_config_path = home_dir.join(".config/tbook/config.toml");
    if global_config_path.exists() {
        match load_config_file(&global_config_path) {
            Ok(file_config) => config = file_config,
            Err(e) => warn!("Failed to parse global config at {global_config_path:?}: {e}"),
        }
    }

    apply_env_overrides(&mut config);

    if let Some(format) = overrides.format {
        config.display.format = format;
    }
    if let Some(ref data_file) = overrides.data_file {
        config.core.data_file = Some(data_file.clone());
    }

    config
}

fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(format) = std::env::var("TBOOK_FORMAT") {
        match format.to_ascii_lowercase().as_str() {
            "json" => config.display.format = OutputFormat::Json,
            "text" => config.display.format = OutputFormat::Text,
            other => warn!("Ignoring unknown TBOOK_FORMAT value '{other}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = resolve_config(&ConfigOverrides::default(), temp_dir.path());
        assert_eq!(config.display.format, OutputFormat::Text);
        assert!(config.core.data_file.is_none());
    }

    #[test]
    fn test_global_config_file_is_read() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(".config/tbook");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.toml"),
            "[display]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = resolve_config(&ConfigOverrides::default(), temp_dir.path());
        assert_eq!(config.display.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(".config/tbook");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.toml"),
            "[display]\nformat = \"json\"\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            format: Some(OutputFormat::Text),
            ..Default::default()
        };
        let config = resolve_config(&overrides, temp_dir.path());
        assert_eq!(config.display.format, OutputFormat::Text);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(".config/tbook");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("config.toml"), "not [valid toml").unwrap();

        let config = resolve_config(&ConfigOverrides::default(), temp_dir.path());
        assert_eq!(config.display.format, OutputFormat::Text);
    }
}
