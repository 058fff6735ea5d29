//! Merge rules: layer provenance, diagnostics, and the running resolution.

mod merge_policy;

use super::{baseline, Config, Overlay, UnknownLogLevel};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A configuration layer, in the order layers are applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "kebab-case")]
pub enum Layer {
    #[default]
    Baseline,
    MainFile(PathBuf),
    DropIn(PathBuf),
    CommandLine,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Baseline => f.write_str("embedded defaults"),
            Layer::MainFile(path) => write!(f, "config file '{}'", path.display()),
            Layer::DropIn(path) => write!(f, "drop-in file '{}'", path.display()),
            Layer::CommandLine => f.write_str("command line"),
        }
    }
}

/// Layer that last set each field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Origins {
    pub cert_file: Layer,
    pub key_file: Layer,
    pub log_level: Layer,
    pub ca_dir: Layer,
}

/// Non-fatal problems found while applying layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `log-level` held an unknown token; INFO was used instead
    InvalidLogLevel { token: String, layer: Layer },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidLogLevel { token, layer } => {
                write!(f, "invalid log level '{}' set via {}; using INFO", token, layer)
            }
        }
    }
}

/// Running result of a resolution: the configuration plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: Config,
    pub origins: Origins,
    /// Layers applied so far, in order
    pub layers: Vec<Layer>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Resolution holding only the embedded defaults
    pub fn baseline() -> Self {
        let mut resolution = Self {
            config: Config::default(),
            origins: Origins::default(),
            layers: Vec::new(),
            diagnostics: Vec::new(),
        };
        resolution.apply(&baseline::overlay(), Layer::Baseline);
        resolution
    }

    /// Apply one layer on top of the current state.
    ///
    /// Only fields present in `overlay` change.
    pub fn apply(&mut self, overlay: &Overlay, layer: Layer) {
        if let Some(UnknownLogLevel(token)) = self.config.update(overlay) {
            tracing::warn!(token = %token, layer = %layer, "Invalid log level, using INFO");
            self.diagnostics.push(Diagnostic::InvalidLogLevel {
                token,
                layer: layer.clone(),
            });
        }

        if overlay.cert_file.is_some() {
            self.origins.cert_file = layer.clone();
        }
        if overlay.key_file.is_some() {
            self.origins.key_file = layer.clone();
        }
        if overlay.log_level.is_some() {
            self.origins.log_level = layer.clone();
        }
        if overlay.ca_dir.is_some() {
            self.origins.ca_dir = layer.clone();
        }

        tracing::debug!(layer = %layer, "Applied configuration layer");
        self.layers.push(layer);
    }
}
