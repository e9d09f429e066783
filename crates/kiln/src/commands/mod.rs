//! CLI command implementations

pub mod completions;
pub mod create;
pub mod templates;

use anyhow::{Context, Result};
use kiln_core::config::{HierarchicalConfigLoader, KilnConfig};
use kiln_projects::TemplateRegistry;

use crate::cli::GlobalArgs;
use crate::output;

/// Load the layered configuration and fold in the global flags
pub fn load_config(globals: &GlobalArgs) -> Result<KilnConfig> {
    let loader = HierarchicalConfigLoader::new()
        .context("Failed to locate kiln config directory")?
        .with_file(globals.config.clone());
    let mut config = loader.load().context("Failed to load kiln configuration")?;

    if let Some(registry) = &globals.registry {
        config.registry = Some(registry.clone());
    }
    if globals.no_color {
        config.display.color_enabled = false;
    }
    if !config.display.color_enabled {
        output::disable_colors();
    }

    Ok(config)
}

/// Load the configured registry file, or the built-in one
pub fn load_registry(config: &KilnConfig) -> Result<TemplateRegistry> {
    match &config.registry {
        Some(path) => TemplateRegistry::load(Some(path))
            .with_context(|| format!("Failed to load template registry from {}", path)),
        None => TemplateRegistry::from_embedded().context("Failed to load built-in template registry"),
    }
}
