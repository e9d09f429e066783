//! Template registry loading from embedded and runtime YAML files.
//!
//! Loads the registry from:
//! - Embedded registry.yaml (compiled into binary)
//! - A runtime YAML file (configured override, testing)

use camino::Utf8Path;

use super::parser::{RegistryConfig, TemplateEntry};
use super::resolver::TemplateResolver;
use crate::error::{Error, Result};
use crate::types::Framework;

/// Get embedded registry YAML
fn get_embedded_yaml() -> &'static str {
    // Path is relative to this source file
    include_str!("../../templates/registry.yaml")
}

/// Loaded registry together with its precomputed resolver
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    config: RegistryConfig,
    resolver: TemplateResolver,
}

impl TemplateRegistry {
    /// Load the registry compiled into the binary
    pub fn from_embedded() -> Result<Self> {
        Self::from_yaml(get_embedded_yaml())
    }

    /// Load a registry file
    pub fn from_file(path: &Utf8Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::registry_not_found(path.as_str()));
        }
        let yaml = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path, "Loading template registry from file");
        Self::from_yaml(&yaml)
    }

    /// Load a registry from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config = RegistryConfig::from_yaml(yaml)?;
        Ok(Self::from_config(config))
    }

    /// Wrap an already validated configuration
    pub fn from_config(config: RegistryConfig) -> Self {
        let resolver = TemplateResolver::from_config(&config);
        Self { config, resolver }
    }

    /// Load the override file when one is configured, the embedded registry otherwise
    pub fn load(override_path: Option<&Utf8Path>) -> Result<Self> {
        match override_path {
            Some(path) => Self::from_file(path),
            None => Self::from_embedded(),
        }
    }

    /// All frameworks, in display order
    pub fn frameworks(&self) -> &[Framework] {
        &self.config.frameworks
    }

    /// Every registered template, in registry order
    pub fn entries(&self) -> Vec<TemplateEntry<'_>> {
        self.config.entries()
    }

    /// Canonical identifiers of all registered templates
    pub fn template_names(&self) -> Vec<&str> {
        self.entries().iter().map(|e| e.identifier()).collect()
    }

    /// Resolve raw template input to its canonical identifier
    pub fn resolve(&self, input: Option<&str>) -> Option<&str> {
        self.resolver.resolve(input)
    }

    /// Resolve raw template input all the way to its registry entry
    pub fn resolve_entry(&self, input: Option<&str>) -> Option<TemplateEntry<'_>> {
        let id = self.resolve(input)?;
        self.get_entry(id)
    }

    /// Find the registry entry for a canonical identifier
    pub fn get_entry(&self, id: &str) -> Option<TemplateEntry<'_>> {
        self.entries().into_iter().find(|e| e.identifier() == id)
    }
}
