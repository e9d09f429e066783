//! # kiln-core
//!
//! Core library for the kiln CLI providing:
//! - Hierarchical configuration loading (embedded defaults, ~/.kiln, KILN_* env)
//! - Shared error types
//! - Home/config directory helpers

pub mod config;
pub mod error;
pub mod utils;

pub use config::{HierarchicalConfigLoader, KilnConfig};
pub use error::{Error, Result};
pub use utils::get_home_dir;
