//! Process configuration store.
//!
//! Built once at startup and handed to consumers by reference. Unlike
//! [`ConfigSource::resolve`], initialization never fails: when any file layer
//! is broken the store falls back to the embedded defaults (plus command-line
//! overrides) so the process always has a usable configuration.

use super::{Config, ConfigSource, Diagnostic, LogLevel, Origins, Resolution};
use crate::error::ResolveError;
use std::path::Path;

#[derive(Debug)]
pub struct ConfigStore {
    resolution: Resolution,
    fallback_cause: Option<ResolveError>,
}

impl ConfigStore {
    /// Resolve against `/etc/rhc/config.toml` and `/etc/rhc/config.toml.d/`
    pub fn initialize() -> Self {
        Self::initialize_from(&ConfigSource::system())
    }

    pub fn initialize_from(source: &ConfigSource) -> Self {
        match source.resolve() {
            Ok(resolution) => Self {
                resolution,
                fallback_cause: None,
            },
            Err(e) => Self {
                resolution: source.resolve_without_files(),
                fallback_cause: Some(e),
            },
        }
    }

    pub fn config(&self) -> &Config {
        &self.resolution.config
    }

    pub fn cert_file(&self) -> &Path {
        &self.resolution.config.cert_file
    }

    pub fn key_file(&self) -> &Path {
        &self.resolution.config.key_file
    }

    pub fn log_level(&self) -> LogLevel {
        self.resolution.config.log_level
    }

    pub fn ca_dir(&self) -> &Path {
        &self.resolution.config.ca_dir
    }

    pub fn origins(&self) -> &Origins {
        &self.resolution.origins
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Error that forced the fallback to embedded defaults, if any
    pub fn fallback_cause(&self) -> Option<&ResolveError> {
        self.fallback_cause.as_ref()
    }

    /// Diagnostics from the resolution that produced this store.
    ///
    /// After a fallback this includes the diagnostics of the failed attempt.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        let failed = self
            .fallback_cause
            .iter()
            .flat_map(|e| e.partial_resolution().diagnostics.iter());
        failed.chain(self.resolution.diagnostics.iter())
    }

    /// Report fallback and diagnostics through `tracing`.
    ///
    /// Resolution runs before logging is initialized, so call this once the
    /// subscriber is installed.
    pub fn log_diagnostics(&self) {
        if let Some(cause) = &self.fallback_cause {
            tracing::error!(error = %cause, "Using embedded default configuration");
        }
        for diagnostic in self.diagnostics() {
            tracing::warn!("{}", diagnostic);
        }
    }
}
