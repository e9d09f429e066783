//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.kiln/config.yaml, or an explicit file)
//! 3. Environment variables (KILN_* prefix)
//! 4. CLI flags (handled by caller)

use super::types::{KilnConfig, KilnConfigOverlay};
use crate::error::{Error, Result};
use crate::utils::get_config_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use std::env;
use std::fs;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
    /// Explicit config file, replacing `<config_dir>/config.yaml`
    config_file: Option<Utf8PathBuf>,
}

impl HierarchicalConfigLoader {
    /// Create a loader rooted at ~/.kiln
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_dir: get_config_dir()?,
            config_file: None,
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir,
            config_file: None,
        }
    }

    /// Use an explicit config file instead of the one in the config directory.
    ///
    /// Unlike the default user config, an explicit file must exist.
    pub fn with_file(mut self, config_file: Option<Utf8PathBuf>) -> Self {
        self.config_file = config_file;
        self
    }

    /// Load configuration with hierarchical precedence
    pub fn load(&self) -> Result<KilnConfig> {
        let mut config = Self::load_embedded_config::<KilnConfig>(DEFAULTS_FILE)?;

        match &self.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config_not_found(path.as_str()));
                }
                let overlay = self.load_yaml_file::<KilnConfigOverlay>(path)?;
                config = config.merge(overlay);
            }
            None => {
                let user_path = self.config_dir.join(USER_CONFIG_FILE);
                if user_path.exists() {
                    let overlay = self.load_yaml_file::<KilnConfigOverlay>(&user_path)?;
                    config = config.merge(overlay);
                }
            }
        }

        config = self.apply_env_overrides(config)?;

        tracing::debug!(
            default_project_name = %config.default_project_name,
            registry = ?config.registry,
            color = config.display.color_enabled,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Load an embedded configuration file
    fn load_embedded_config<T: DeserializeOwned>(filename: &str) -> Result<T> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file and parse it
    fn load_yaml_file<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        // An empty file is a valid (empty) overlay.
        if content.trim().is_empty() {
            return serde_yaml_ng::from_str("{}").map_err(Error::from);
        }
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: KilnConfig) -> Result<KilnConfig> {
        if let Ok(val) = env::var("KILN_DEFAULT_PROJECT_NAME") {
            let val = val.trim();
            if val.is_empty() {
                return Err(Error::invalid_config(
                    "KILN_DEFAULT_PROJECT_NAME must not be empty",
                ));
            }
            config.default_project_name = val.to_string();
        }

        if let Ok(val) = env::var("KILN_REGISTRY") {
            if !val.is_empty() {
                config.registry = Some(Utf8PathBuf::from(val));
            }
        }

        if let Ok(val) = env::var("KILN_NO_COLOR") {
            let disabled = matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes");
            config.display.color_enabled = !disabled;
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}
