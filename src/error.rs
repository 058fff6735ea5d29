//! Error types for configuration resolution and the rhc binary.

use crate::config::{Config, Resolution};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a single configuration layer
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to load {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read drop-in directory {}: {source}", .dir.display())]
    Discovery {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("drop-in path {} is not a directory", .dir.display())]
    NotADirectory { dir: PathBuf },
}

/// A failed resolution.
///
/// Carries the value accumulated before the failing layer. That value is for
/// reporting only; it must never be used as the effective configuration.
#[derive(Debug, Error)]
#[error("configuration resolution failed: {cause}")]
pub struct ResolveError {
    partial: Box<Resolution>,
    #[source]
    cause: ConfigError,
}

impl ResolveError {
    pub(crate) fn new(partial: Resolution, cause: ConfigError) -> Self {
        Self {
            partial: Box::new(partial),
            cause,
        }
    }

    /// Configuration accumulated up to (not including) the failing layer
    pub fn partial(&self) -> &Config {
        &self.partial.config
    }

    /// Full partial resolution, including provenance of the applied layers
    pub fn partial_resolution(&self) -> &Resolution {
        &self.partial
    }

    pub fn cause(&self) -> &ConfigError {
        &self.cause
    }

    pub fn into_parts(self) -> (Resolution, ConfigError) {
        (*self.partial, self.cause)
    }
}

/// Top-level errors surfaced by the binary
#[derive(Debug, Error)]
pub enum RhcError {
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<serde_json::Error> for RhcError {
    fn from(err: serde_json::Error) -> Self {
        RhcError::Output(err.to_string())
    }
}
