//! Configuration handling for clap-helptree
//!
//! Configuration is stored in `config.toml` in the per-user config
//! directory (e.g. `~/.config/clap-helptree/config.toml`). Every field has
//! a default, so a missing file is the same as an empty one.

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::paths;
use crate::render::{DEFAULT_SVG_WIDTH, DEFAULT_TEXT_WIDTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// When to emit terminal colors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where JSON/TXT/SVG exports go (defaults to the data directory)
    pub export_dir: Option<PathBuf>,

    /// Line width of plain-text captures
    pub text_width: usize,

    /// Minimum width in columns of SVG captures
    pub svg_width: usize,

    /// Terminal colors for the console view
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: None,
            text_width: DEFAULT_TEXT_WIDTH,
            svg_width: DEFAULT_SVG_WIDTH,
            color: ColorMode::Auto,
        }
    }
}

impl Config {
    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        paths::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.text_width == 0 {
            return Err(ConfigError::Invalid("text_width must be positive".to_string()));
        }
        if self.svg_width == 0 {
            return Err(ConfigError::Invalid("svg_width must be positive".to_string()));
        }
        Ok(())
    }

    /// The export directory: configured, or the per-user data directory
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(paths::data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.text_width, 200);
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.export_dir(), paths::data_dir());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
export_dir = "/tmp/trees"
text_width = 120
color = "never"
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/trees"));
        assert_eq!(config.text_width, 120);
        assert_eq!(config.svg_width, DEFAULT_SVG_WIDTH);
        assert!(!config.color.enabled());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "text_width = \"wide\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn zero_width_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "text_width = 0").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("text_width"));
    }
}
