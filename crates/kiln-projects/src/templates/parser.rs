//! YAML registry parsing and construction checks.
//!
//! Parses registry.yaml into strongly-typed Rust structures.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::resolver::token_signature;
use crate::error::{Error, Result};
use crate::types::{Framework, Variant};

/// Complete registry configuration from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub version: String,
    pub frameworks: Vec<Framework>,
}

/// One registered template: a leaf of the framework/variant tree
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry<'a> {
    pub framework: &'a Framework,
    pub variant: Option<&'a Variant>,
}

impl<'a> TemplateEntry<'a> {
    /// Canonical identifier of this entry
    pub fn identifier(&self) -> &'a str {
        match self.variant {
            Some(v) => &v.name,
            None => &self.framework.name,
        }
    }
}

impl RegistryConfig {
    /// Parse and validate a registry from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Every registered template, in registry order
    pub fn entries(&self) -> Vec<TemplateEntry<'_>> {
        let mut entries = Vec::new();
        for framework in &self.frameworks {
            if framework.variants.is_empty() {
                entries.push(TemplateEntry {
                    framework,
                    variant: None,
                });
            } else {
                entries.extend(framework.variants.iter().map(|variant| TemplateEntry {
                    framework,
                    variant: Some(variant),
                }));
            }
        }
        entries
    }

    /// Check the construction rules the resolver relies on
    pub fn validate(&self) -> Result<()> {
        if self.frameworks.is_empty() {
            return Err(Error::invalid_registry("no frameworks defined"));
        }

        let mut framework_names = HashSet::new();
        for framework in &self.frameworks {
            if framework.name.trim().is_empty() {
                return Err(Error::invalid_registry("framework with an empty name"));
            }
            if !framework_names.insert(framework.name.as_str()) {
                return Err(Error::invalid_registry(format!(
                    "framework '{}' is defined twice",
                    framework.name
                )));
            }
            for variant in &framework.variants {
                let base = format!("{}-", framework.name);
                if variant.name != framework.name && !variant.name.starts_with(&base) {
                    return Err(Error::invalid_registry(format!(
                        "variant '{}' must start with its framework name '{}'",
                        variant.name, framework.name
                    )));
                }
                let mut sample_names = HashSet::new();
                for sample in &variant.samples {
                    if !sample_names.insert(sample.name.as_str()) {
                        return Err(Error::invalid_registry(format!(
                            "sample '{}' is listed twice in variant '{}'",
                            sample.name, variant.name
                        )));
                    }
                }
            }
        }

        let mut identifiers = HashSet::new();
        let mut signatures: HashMap<BTreeSet<String>, &str> = HashMap::new();
        for entry in self.entries() {
            let id = entry.identifier();
            if id.split('-').any(|token| token.trim().is_empty()) {
                return Err(Error::invalid_registry(format!(
                    "template identifier '{}' has an empty tag",
                    id
                )));
            }
            if !identifiers.insert(id) {
                return Err(Error::duplicate_template(id));
            }
            let signature = token_signature(id);
            if let Some(existing) = signatures.insert(signature, id) {
                return Err(Error::ambiguous_signature(existing, id));
            }
        }

        Ok(())
    }
}
