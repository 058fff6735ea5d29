//! CLI parse: clap types for rhc. No behavior; definitions only.

use crate::config::{Overlay, DROP_IN_DIR, MAIN_CONFIG_PATH};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// rhc - control the system's connection to Red Hat
#[derive(Parser)]
#[command(name = "rhc")]
#[command(about = "Control the system's connection to Red Hat")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read config values from FILE
    #[arg(long, value_name = "FILE", default_value = MAIN_CONFIG_PATH, hide = true)]
    pub config: PathBuf,

    /// Read drop-in config files from DIR
    #[arg(long, value_name = "DIR", default_value = DROP_IN_DIR, hide = true)]
    pub drop_in_dir: PathBuf,

    /// Use FILE as the client certificate
    #[arg(long, value_name = "FILE", hide = true)]
    pub cert_file: Option<PathBuf>,

    /// Use FILE as the client's private key
    #[arg(long, value_name = "FILE", hide = true)]
    pub key_file: Option<PathBuf>,

    /// Set the logging output level to LEVEL (DEBUG, INFO, WARN, ERROR)
    #[arg(long, value_name = "LEVEL", hide = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Flags that override the configuration files, as the final layer.
    ///
    /// `--log-level` is case-insensitive; it is uppercased before merging.
    pub fn overrides(&self) -> Overlay {
        Overlay {
            cert_file: self.cert_file.clone(),
            key_file: self.key_file.clone(),
            log_level: self.log_level.as_deref().map(str::to_ascii_uppercase),
            ca_dir: None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Include the layer that set each value
        #[arg(long)]
        origins: bool,
    },
    /// Resolve strictly and report the first broken layer
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
