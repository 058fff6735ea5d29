//! Configuration System
//!
//! Resolves the effective rhc configuration from layered TOML documents:
//!
//! 1. Embedded defaults (compiled into the binary, define every key)
//! 2. Main configuration file: `/etc/rhc/config.toml`
//! 3. Drop-in files: `/etc/rhc/config.toml.d/*.toml`, in lexicographic filename order
//! 4. Command-line overrides
//!
//! A layer only replaces the keys it mentions. A missing main file or drop-in
//! directory is not an error; a malformed one stops resolution.
//!
//! ```no_run
//! use rhc::config::ConfigSource;
//!
//! let source = ConfigSource::new("/custom/config.toml", "/custom/config.toml.d");
//! let config = source.read()?;
//! println!("{}", config.log_level);
//! # Ok::<(), rhc::error::ResolveError>(())
//! ```

use serde::Serialize;
use std::path::PathBuf;

mod baseline;
mod document;
mod level;
mod merge;
mod resolver;
mod sources;
mod store;

pub use baseline::DEFAULT_CONFIG;
pub use document::{parse_overlay, Overlay};
pub use level::{LogLevel, UnknownLogLevel};
pub use merge::{Diagnostic, Layer, Origins, Resolution};
pub use resolver::ConfigSource;
pub use sources::drop_in::{discover, DropInFile};
pub use store::ConfigStore;

/// Canonical main configuration file
pub const MAIN_CONFIG_PATH: &str = "/etc/rhc/config.toml";

/// Canonical drop-in directory
pub const DROP_IN_DIR: &str = "/etc/rhc/config.toml.d/";

/// Extension a file needs to be picked up as a drop-in
pub const DROP_IN_EXTENSION: &str = ".toml";

/// Effective configuration after all layers are applied.
///
/// Every field has a concrete value; an empty path means "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Client certificate
    pub cert_file: PathBuf,
    /// Client private key
    pub key_file: PathBuf,
    pub log_level: LogLevel,
    /// Directory of trusted certificate authorities
    pub ca_dir: PathBuf,
}
