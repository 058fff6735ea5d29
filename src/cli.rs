//! CLI domain: parse, route, and output only.
//! Configuration is resolved once into a store; the route table reads it.

mod output;
mod parse;
mod route;

pub use output::{format_config_json, format_config_text, map_error};
pub use parse::{Cli, Commands, ConfigCommands, OutputFormat};
pub use route::RunContext;
