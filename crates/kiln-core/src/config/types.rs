//! Configuration types

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Fallback project name used when none can be derived from input
pub const DEFAULT_PROJECT_NAME: &str = "kiln-project";

/// Resolved kiln configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KilnConfig {
    /// Name used for the target directory when the user leaves it blank
    #[serde(default = "default_project_name")]
    pub default_project_name: String,

    /// Registry file replacing the embedded template registry
    #[serde(default)]
    pub registry: Option<Utf8PathBuf>,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Terminal display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color_enabled: bool,
}

/// Partial configuration read from a user file; absent keys keep the
/// lower-precedence value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KilnConfigOverlay {
    pub default_project_name: Option<String>,
    pub registry: Option<Utf8PathBuf>,
    #[serde(default)]
    pub display: DisplayOverlay,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisplayOverlay {
    pub color_enabled: Option<bool>,
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for KilnConfig {
    fn default() -> Self {
        Self {
            default_project_name: default_project_name(),
            registry: None,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

impl KilnConfig {
    /// Apply an overlay on top of this config
    pub fn merge(mut self, overlay: KilnConfigOverlay) -> Self {
        if let Some(name) = overlay.default_project_name {
            self.default_project_name = name;
        }
        if overlay.registry.is_some() {
            self.registry = overlay.registry;
        }
        if let Some(color) = overlay.display.color_enabled {
            self.display.color_enabled = color;
        }
        self
    }
}
