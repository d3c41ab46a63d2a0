//! minuta.toml configuration
//!
//! Every field has a default, so an absent or partial file is valid.

pub mod consts;
pub mod model;

pub use model::{
    Config, EditorConfig, FontFamily, OutputConfig, PageConfig, PageFormat, RecordConfig,
    SubstitutionConfig,
};

use crate::error::{MinutaError, Result};
use std::path::Path;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "minuta.toml";

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MinutaError::ConfigParseError(e.to_string()))
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        // Surface invalid page geometry at load time rather than at export
        config.page.page_size()?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `minuta.toml` from `dir`, falling back to defaults when absent
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }
}
