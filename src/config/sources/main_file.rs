//! Main config file source: /etc/rhc/config.toml

use crate::config::document::{parse_overlay, Overlay};
use crate::error::ConfigError;
use std::io::ErrorKind;
use std::path::Path;

/// Load the main configuration file.
///
/// Returns `Ok(None)` when the file does not exist. Any other read failure, or a
/// document that does not parse, is an error.
pub fn load(path: &Path) -> Result<Option<Overlay>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(config_path = %path.display(), "Main config file not found, skipping");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    parse_overlay(&content, &path.display().to_string()).map(Some)
}
