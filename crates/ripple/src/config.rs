//! TOML configuration.
//!
//! ```toml
//! slice_y = 2.5
//!
//! [controls]
//! separation = 6.0
//! phase = 3.14159
//! ```
//!
//! Missing keys keep their defaults. Unknown keys are rejected so typos do
//! not go unnoticed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::controls::Controls;
use crate::error::{Error, Result};

/// Everything a configuration file can set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial slider positions.
    pub controls: Controls,
    /// Initial cross-section line.
    pub slice_y: f64,
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed TOML or unknown keys, and
    /// the range errors of [`Controls::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.controls.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
