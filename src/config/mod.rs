//! Configuration management
//!
//! Handles loading, validation, and merging of configuration from:
//! - TOML files
//! - CLI arguments

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod types;

pub use types::{ClipboardConfig, InspectConfig, OutputConfig};

/// Name of the directory under the user config dir
const CONFIG_DIR_NAME: &str = "clipscope";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Per-format inspection behaviour
    #[serde(default)]
    pub inspect: InspectConfig,
    /// Clipboard backend configuration
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    /// Report output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// CLI values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--auto` was given
    pub auto_convert: bool,
    /// `--save` was given
    pub save_images: bool,
    /// `--image-dir`
    pub image_dir: Option<PathBuf>,
    /// `--backend`
    pub backend: Option<String>,
    /// `--primary` was given
    pub primary: bool,
    /// `--color`
    pub color: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Load the explicit path if given, otherwise the default path if it exists.
    ///
    /// A missing default file is not an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path).or_else(|e| {
                tracing::warn!("Failed to load config: {:#}, using defaults", e);
                Ok(Self::default())
            }),
            _ => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `$XDG_CONFIG_HOME/clipscope/config.toml` (or the platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        match self.clipboard.backend.as_str() {
            "auto" | "wayland" | "x11" => {}
            _ => anyhow::bail!("Invalid clipboard backend: {}", self.clipboard.backend),
        }

        match self.output.color.as_str() {
            "auto" | "always" | "never" => {}
            _ => anyhow::bail!("Invalid color mode: {}", self.output.color),
        }

        if let Some(dir) = &self.inspect.image_dir {
            if !dir.is_dir() {
                anyhow::bail!("Image directory not found: {}", dir.display());
            }
        }

        Ok(())
    }

    /// Override config with CLI arguments
    ///
    /// Flags only ever switch behaviour on; values replace the file's.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.inspect.auto_convert |= overrides.auto_convert;
        self.inspect.save_images |= overrides.save_images;
        self.clipboard.primary |= overrides.primary;

        if let Some(dir) = overrides.image_dir {
            self.inspect.image_dir = Some(dir);
        }
        if let Some(backend) = overrides.backend {
            self.clipboard.backend = backend;
        }
        if let Some(color) = overrides.color {
            self.output.color = color;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.inspect.auto_convert);
        assert!(!config.inspect.save_images);
        assert_eq!(config.clipboard.backend, "auto");
        assert_eq!(config.output.color, "auto");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[inspect]\nsave_images = true\n\n[clipboard]\nbackend = \"x11\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.inspect.save_images);
        assert!(!config.inspect.auto_convert);
        assert_eq!(config.clipboard.backend, "x11");
        assert_eq!(config.output.color, "auto");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load_or_default(Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_config_validation_invalid_backend() {
        let mut config = Config::default();
        config.clipboard.backend = "windows".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_color() {
        let mut config = Config::default();
        config.output.color = "sometimes".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_missing_image_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.inspect.image_dir = Some(dir.path().join("missing"));
        assert!(config.validate().is_err());

        config.inspect.image_dir = Some(dir.path().to_path_buf());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_overrides() {
        let mut base = Config::default();
        base.inspect.save_images = true;

        let config = base.with_overrides(Overrides {
            auto_convert: true,
            backend: Some("wayland".to_string()),
            ..Default::default()
        });
        assert!(config.inspect.auto_convert);
        // flags never switch a file setting off
        assert!(config.inspect.save_images);
        assert_eq!(config.clipboard.backend, "wayland");
        assert_eq!(config.output.color, "auto");
    }
}
