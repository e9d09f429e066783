//! Error types for kiln-projects

use thiserror::Error;

/// Result type alias using kiln-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Registry file not found
    #[error("Template registry not found: {path}")]
    RegistryNotFound { path: String },

    /// Registry content violates a construction rule
    #[error("Invalid template registry: {message}")]
    InvalidRegistry { message: String },

    /// Two registry entries share an identifier
    #[error("Duplicate template identifier in registry: {name}")]
    DuplicateTemplate { name: String },

    /// Two registry entries share a token signature
    #[error("Templates '{first}' and '{second}' have the same set of tags")]
    AmbiguousSignature { first: String, second: String },

    /// Prompting the user failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Interactive input required but not available
    #[error("Not running in an interactive terminal")]
    NotInteractive,

    /// The chain finished without filling a required field
    #[error("Question chain finished without a value for '{field}'")]
    IncompleteAnswers { field: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a registry not found error
    pub fn registry_not_found(path: impl Into<String>) -> Self {
        Self::RegistryNotFound { path: path.into() }
    }

    /// Create an invalid registry error
    pub fn invalid_registry(message: impl Into<String>) -> Self {
        Self::InvalidRegistry {
            message: message.into(),
        }
    }

    /// Create a duplicate template error
    pub fn duplicate_template(name: impl Into<String>) -> Self {
        Self::DuplicateTemplate { name: name.into() }
    }

    /// Create an ambiguous signature error
    pub fn ambiguous_signature(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::AmbiguousSignature {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an incomplete answers error
    pub fn incomplete_answers(field: impl Into<String>) -> Self {
        Self::IncompleteAnswers {
            field: field.into(),
        }
    }
}
