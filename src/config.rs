// src/config.rs
//! Run configuration loaded from sitelint.toml.

use crate::error::{Result, SitelintError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Diagnostic codes dropped before emission.
    #[serde(default)]
    pub suppress: Vec<String>,

    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SitelintError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(toml::from_str(&text)?)
    }

    #[must_use]
    pub fn is_suppressed(&self, code: &str) -> bool {
        self.suppress.iter().any(|c| c == code)
    }
}
