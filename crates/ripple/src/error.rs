//! Error types for the sampling drivers and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::controls::Param;

/// Errors raised while loading configuration or adjusting controls.
///
/// The wave evaluation itself never fails; everything here concerns input
/// that reaches the drivers from files or the command line.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a configuration file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file is not valid TOML or has unknown keys.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A parameter lies outside its slider range.
    #[error("{param} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        param: Param,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter is NaN or infinite.
    #[error("{param} must be a finite number")]
    NonFinite { param: Param },

    /// Serializing output failed.
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for driver operations.
pub type Result<T> = std::result::Result<T, Error>;
