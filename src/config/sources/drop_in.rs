//! Drop-in directory source: /etc/rhc/config.toml.d/*.toml

use crate::config::document::{parse_overlay, Overlay};
use crate::config::DROP_IN_EXTENSION;
use crate::error::ConfigError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A discovered drop-in document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropInFile {
    path: PathBuf,
}

impl DropInFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the drop-in.
    ///
    /// Unlike the main file, a drop-in that vanished after discovery is an error.
    pub fn load(&self) -> Result<Overlay, ConfigError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_overlay(&content, &self.path.display().to_string())
    }
}

/// List drop-in files in `dir`, in the order they are applied.
///
/// Only direct children whose name ends in `.toml` count; subdirectories are
/// skipped. Names are compared byte-wise, so `20-x.toml` is applied after
/// `10-x.toml`. A missing directory yields an empty list.
pub fn discover(dir: &Path) -> Result<Vec<DropInFile>, ConfigError> {
    match std::fs::metadata(dir) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(ConfigError::NotADirectory {
                dir: dir.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "Drop-in directory not found, skipping");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ConfigError::Discovery {
                dir: dir.to_path_buf(),
                source,
            })
        }
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let message = e.to_string();
            ConfigError::Discovery {
                dir: dir.to_path_buf(),
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::new(ErrorKind::Other, message)),
            }
        })?;

        if entry.file_type().is_dir() {
            continue;
        }
        if !entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(DROP_IN_EXTENSION.as_bytes())
        {
            continue;
        }

        files.push(DropInFile {
            path: entry.into_path(),
        });
    }

    Ok(files)
}
