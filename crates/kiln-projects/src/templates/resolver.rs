//! Template identifier resolution.
//!
//! Normalizes a user-supplied template string into a canonical registry
//! identifier. Two input forms are accepted:
//! - the canonical form, hyphen-joined (`vue-devtools-tailwind`)
//! - a comma-separated tag list in any order (`tailwind,devtools,vue`)
//!
//! Both are reduced to a token signature (the sorted, lowercased, deduplicated
//! set of tags) and looked up in a map built once from the registry. Only exact
//! signature matches resolve.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::parser::RegistryConfig;

/// Reduce an input string to its token signature.
///
/// Splits on commas when any are present, otherwise on hyphens; each token is
/// trimmed and lowercased. Empty tokens stay in the signature so stray
/// separators never match a registered identifier.
pub fn token_signature(input: &str) -> BTreeSet<String> {
    let separator = if input.contains(',') { ',' } else { '-' };
    input
        .split(separator)
        .map(|token| token.trim().to_lowercase())
        .collect()
}

/// Signature lookup table built from a registry
#[derive(Debug, Clone, Default)]
pub struct TemplateResolver {
    signatures: HashMap<BTreeSet<String>, String>,
    families: HashSet<String>,
}

impl TemplateResolver {
    /// Build the lookup table. Assumes the registry passed validation, so no
    /// two identifiers share a signature.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut signatures = HashMap::new();
        let mut families = HashSet::new();

        for entry in config.entries() {
            let id = entry.identifier();
            signatures.insert(token_signature(id), id.to_string());
            if let Some(family) = id.split('-').next() {
                families.insert(family.to_lowercase());
            }
        }

        tracing::trace!(
            templates = signatures.len(),
            families = families.len(),
            "Built template resolver"
        );

        Self {
            signatures,
            families,
        }
    }

    /// Resolve `input` to a canonical identifier, or `None` when it names no
    /// registered template.
    pub fn resolve(&self, input: Option<&str>) -> Option<&str> {
        let input = input?.trim();
        if input.is_empty() {
            return None;
        }

        let signature = token_signature(input);
        if !signature.iter().any(|token| self.families.contains(token)) {
            tracing::debug!(input, "Template input names no known template family");
            return None;
        }

        let resolved = self.signatures.get(&signature).map(String::as_str);
        match resolved {
            Some(id) => tracing::debug!(input, template = id, "Resolved template"),
            None => tracing::debug!(input, "No template matches input tags"),
        }
        resolved
    }
}
