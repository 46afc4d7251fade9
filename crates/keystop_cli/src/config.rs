//! Keystop configuration file handling
//!
//! `keystop.toml` is optional. Every table and field has a default, so a
//! missing file, an empty file and a partial file all load.
//!
//! ```toml
//! [canvas]
//! width = 256
//! height = 32
//! horizontal = true
//!
//! [output]
//! format = "css"
//! ```

use anyhow::{Context, Result};
use keystop_core::{Format, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "keystop.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KeystopConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for `keystop new`
#[derive(Debug, Deserialize, Serialize)]
pub struct CanvasConfig {
    #[serde(default = "default_size")]
    pub width: u32,
    #[serde(default = "default_size")]
    pub height: u32,
    #[serde(default = "default_true")]
    pub horizontal: bool,
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            horizontal: true,
        }
    }
}

/// Defaults for `keystop sample`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Format,
}

impl KeystopConfig {
    /// Load `keystop.toml` from a directory, falling back to defaults when
    /// the file does not exist
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    /// Load an explicit config file, which must exist
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = KeystopConfig::parse("").unwrap();
        assert_eq!(config.canvas.width, 128);
        assert_eq!(config.canvas.height, 128);
        assert!(config.canvas.horizontal);
        assert_eq!(config.output.format, Format::PackedHexWord);
    }

    #[test]
    fn test_partial_config() {
        let config = KeystopConfig::parse(
            r#"
            [canvas]
            height = 16
            horizontal = false

            [output]
            format = "css"
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.width, 128);
        assert_eq!(config.canvas.height, 16);
        assert!(!config.canvas.horizontal);
        assert_eq!(config.output.format, Format::CssRgba);
    }

    #[test]
    fn test_unknown_format_fails() {
        assert!(KeystopConfig::parse("[output]\nformat = \"png\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml = KeystopConfig::default().to_toml().unwrap();
        assert!(toml.contains("format = \"hex\""));
        let config = KeystopConfig::parse(&toml).unwrap();
        assert_eq!(config.canvas.width, 128);
    }

    #[test]
    fn test_missing_file_in_dir_is_default() {
        let dir = std::env::temp_dir().join("keystop-config-test-missing");
        let config = KeystopConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.output.format, Format::PackedHexWord);
    }
}
