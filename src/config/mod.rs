//! Configuration management for inlay templates
//!
//! This module contains the configuration system components:
//! - `loader`: Engine settings and manifest file loading
//! - `manifest`: A template declared entirely by a manifest file

pub mod loader;
pub mod manifest;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use loader::{Config, ConfigV1, EngineConfig};
pub use manifest::ManifestTemplate;
