//! Partial configuration documents.
//!
//! An [`Overlay`] is what a single TOML document says about the configuration.
//! Each field is `None` when the key is not mentioned and `Some(value)` when it
//! is, so an explicit `cert-file = ""` is distinguishable from no `cert-file` at all.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Partial configuration parsed from one document.
///
/// Unknown keys are ignored. `log_level` is kept as the raw token; interpreting it
/// is the merge step's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Overlay {
    pub cert_file: Option<PathBuf>,
    pub key_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub ca_dir: Option<PathBuf>,
}

impl Overlay {
    /// True when no recognized key is present
    pub fn is_empty(&self) -> bool {
        self.cert_file.is_none()
            && self.key_file.is_none()
            && self.log_level.is_none()
            && self.ca_dir.is_none()
    }

    /// True when every recognized key is present
    pub fn is_complete(&self) -> bool {
        self.cert_file.is_some()
            && self.key_file.is_some()
            && self.log_level.is_some()
            && self.ca_dir.is_some()
    }
}

/// Parse a TOML document into an [`Overlay`].
///
/// `source_name` identifies the document in the error (usually its path).
pub fn parse_overlay(content: &str, source_name: &str) -> Result<Overlay, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        source_name: source_name.to_string(),
        source,
    })
}
