//! Configuration loading and management

mod hierarchical_loader;
mod types;

pub use hierarchical_loader::HierarchicalConfigLoader;
pub use types::{
    DisplayConfig, DisplayOverlay, KilnConfig, KilnConfigOverlay, DEFAULT_PROJECT_NAME,
};
