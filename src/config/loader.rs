//! Configuration loading and management

use crate::constants::{names, CONFIG_FILENAMES, DEFAULT_FILE_EXTENSION};
use crate::error::{Error, Result};
use crate::renderer::Data;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Settings of the engine and the minijinja environment it renders with.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Extension of block files, without the leading dot.
    #[serde(default = "get_default_extension")]
    pub extension: String,
    /// Escape output by file name (`.html`, `.xml`, ...). Off by default: block
    /// authors escape with the `escape` filter where they need it.
    #[serde(default)]
    pub auto_escape: bool,
    #[serde(default = "get_true")]
    pub trim_blocks: bool,
    #[serde(default)]
    pub lstrip_blocks: bool,
    #[serde(default)]
    pub keep_trailing_newline: bool,
    /// Fail on undefined variables instead of rendering them empty.
    #[serde(default)]
    pub strict_undefined: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            extension: get_default_extension(),
            auto_escape: false,
            trim_blocks: true,
            lstrip_blocks: false,
            keep_trailing_newline: false,
            strict_undefined: false,
        }
    }
}

/// Template manifest: engine settings plus the blocks and scopes to declare.
#[derive(Debug, Deserialize)]
pub struct ConfigV1 {
    #[serde(flatten)]
    pub engine: EngineConfig,
    /// Block name to file name, without extension.
    #[serde(default)]
    pub blocks: IndexMap<String, String>,
    /// Scope name to variables.
    #[serde(default)]
    pub vars: IndexMap<String, serde_json::Value>,
    /// Parameters the engine is constructed with.
    #[serde(default)]
    pub params: Data,
}

impl ConfigV1 {
    pub fn validate(&self) -> Result<()> {
        let extension = &self.engine.extension;
        if extension.is_empty() {
            return Err(Error::ConfigValidation("extension must not be empty".into()));
        }
        if extension.starts_with('.') {
            return Err(Error::ConfigValidation(format!(
                "extension '{extension}' must not start with '.'"
            )));
        }
        if !self.blocks.contains_key(names::LAYOUT) {
            log::warn!("No '{}' block declared; rendering will fail", names::LAYOUT);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Config {
    #[serde(rename = "v1")]
    V1(ConfigV1),
}

impl Config {
    pub fn load_config<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let template_root = template_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = template_root.join(config_file_name);

            if config_file_path.exists() {
                log::debug!("Loading configuration from {}", config_file_path.display());
                let content = std::fs::read_to_string(config_file_path)?;
                let config: Config = match *config_file_name {
                    "inlay.json" => serde_json::from_str(&content)?,
                    "inlay.yaml" | "inlay.yml" => serde_yaml::from_str(&content)?,
                    _ => unreachable!(),
                };

                return Ok(config);
            }
        }

        Err(Error::ConfigNotFound {
            template_dir: template_root.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }
}

fn get_default_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

fn get_true() -> bool {
    true
}
