//! Layered resolution: defaults, main file, drop-ins, command line.

use super::merge::{Layer, Resolution};
use super::sources::{drop_in, main_file};
use super::{Config, Overlay, DROP_IN_DIR, MAIN_CONFIG_PATH};
use crate::error::ResolveError;
use std::path::{Path, PathBuf};

/// Where configuration may come from for one resolution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    path: PathBuf,
    drop_in_dir: PathBuf,
    command_line: Option<Overlay>,
}

impl ConfigSource {
    pub fn new(path: impl Into<PathBuf>, drop_in_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            drop_in_dir: drop_in_dir.into(),
            command_line: None,
        }
    }

    /// Source for the canonical system locations
    pub fn system() -> Self {
        Self::new(MAIN_CONFIG_PATH, DROP_IN_DIR)
    }

    /// Add a final layer applied after every drop-in
    pub fn with_command_line(mut self, overlay: Overlay) -> Self {
        self.command_line = Some(overlay);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn drop_in_dir(&self) -> &Path {
        &self.drop_in_dir
    }

    /// Resolve the effective configuration.
    ///
    /// On error the partially resolved value is available from
    /// [`ResolveError::partial`]; it must not be used as configuration.
    pub fn read(&self) -> Result<Config, ResolveError> {
        self.resolve().map(|resolution| resolution.config)
    }

    /// Like [`read`](Self::read), keeping provenance and diagnostics.
    pub fn resolve(&self) -> Result<Resolution, ResolveError> {
        let mut resolution = Resolution::baseline();

        match main_file::load(&self.path) {
            Ok(Some(overlay)) => resolution.apply(&overlay, Layer::MainFile(self.path.clone())),
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, "Failed to load main configuration file");
                return Err(ResolveError::new(resolution, e));
            }
        }

        let files = match drop_in::discover(&self.drop_in_dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::error!(error = %e, dir = %self.drop_in_dir.display(), "Failed to load drop-in files");
                return Err(ResolveError::new(resolution, e));
            }
        };

        for file in files {
            match file.load() {
                Ok(overlay) => resolution.apply(&overlay, Layer::DropIn(file.path().to_path_buf())),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load drop-in file");
                    return Err(ResolveError::new(resolution, e));
                }
            }
        }

        self.apply_command_line(&mut resolution);
        Ok(resolution)
    }

    /// Embedded defaults plus the command-line layer, ignoring every file.
    pub fn resolve_without_files(&self) -> Resolution {
        let mut resolution = Resolution::baseline();
        self.apply_command_line(&mut resolution);
        resolution
    }

    fn apply_command_line(&self, resolution: &mut Resolution) {
        if let Some(overlay) = &self.command_line {
            resolution.apply(overlay, Layer::CommandLine);
        }
    }
}
