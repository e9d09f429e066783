//! Template registry and resolution.
//!
//! The registry is a fixed tree of frameworks, their variants and the
//! samples each variant ships. Every leaf of the framework/variant tree has a
//! canonical identifier made of hyphen-joined tags, framework tag first:
//!
//! ```yaml
//! frameworks:
//!   - name: vue
//!     color: green
//!     variants:
//!       - name: vue-devtools-tailwind
//!         color: blue
//!         samples:
//!           - name: dashboard
//!             color: cyan
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use kiln_projects::templates::TemplateRegistry;
//!
//! let registry = TemplateRegistry::from_embedded().unwrap();
//!
//! // Tag lists resolve regardless of order and case
//! assert_eq!(
//!     registry.resolve(Some("tailwind,devtools,vue")),
//!     Some("vue-devtools-tailwind")
//! );
//! assert_eq!(registry.resolve(Some("vue-typescript")), None);
//! ```

pub mod parser;
pub mod registry;
pub mod resolver;

pub use parser::{RegistryConfig, TemplateEntry};
pub use registry::TemplateRegistry;
pub use resolver::{token_signature, TemplateResolver};
