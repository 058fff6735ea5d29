//! CLI route: single route table and run context.

use crate::cli::output::{format_config_json, format_config_text};
use crate::cli::parse::{Commands, ConfigCommands, OutputFormat};
use crate::config::{ConfigSource, ConfigStore};
use crate::error::RhcError;

/// Runtime context for CLI execution: the source layers and the store resolved from them.
pub struct RunContext {
    source: ConfigSource,
    store: ConfigStore,
}

impl RunContext {
    /// Resolve the store once. Never fails; broken layers fall back to defaults.
    pub fn new(source: ConfigSource) -> Self {
        let store = ConfigStore::initialize_from(&source);
        Self { source, store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn execute(&self, command: &Commands) -> Result<String, RhcError> {
        match command {
            Commands::Config { command } => self.execute_config(command),
        }
    }

    fn execute_config(&self, command: &ConfigCommands) -> Result<String, RhcError> {
        match command {
            ConfigCommands::Show { format, origins } => {
                let resolution = self.store.resolution();
                match format {
                    OutputFormat::Text => Ok(format_config_text(resolution, *origins)),
                    OutputFormat::Json => format_config_json(resolution, *origins),
                }
            }
            ConfigCommands::Check => {
                let resolution = self.source.resolve()?;
                let mut out = format!("Configuration OK ({} layers)", resolution.layers.len());
                for layer in &resolution.layers {
                    out.push_str(&format!("\n  {}", layer));
                }
                for diagnostic in &resolution.diagnostics {
                    out.push_str(&format!("\nwarning: {}", diagnostic));
                }
                Ok(out)
            }
        }
    }
}
