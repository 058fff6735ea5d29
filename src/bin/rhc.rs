//! rhc CLI Binary
//!
//! Resolves the layered configuration once, initializes logging from it, then
//! dispatches the command.

use clap::Parser;
use rhc::cli::{Cli, RunContext};
use rhc::config::ConfigSource;
use rhc::logging::{init_logging, LogFormat, LoggingOptions};
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let source = ConfigSource::new(&cli.config, &cli.drop_in_dir).with_command_line(cli.overrides());
    let context = RunContext::new(source);

    let logging_options = match build_logging_options(&cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", rhc::cli::map_error(&e));
            process::exit(1);
        }
    };
    if let Err(e) = init_logging(context.store().log_level(), &logging_options) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }
    context.store().log_diagnostics();
    debug!(log_level = %context.store().log_level(), "Configuration resolved");

    match context.execute(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", rhc::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging options from CLI flags and `NO_COLOR`
fn build_logging_options(cli: &Cli) -> Result<LoggingOptions, rhc::error::RhcError> {
    let format = match cli.log_format.as_deref() {
        Some(format) => format.parse()?,
        None => LogFormat::Text,
    };
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    Ok(LoggingOptions {
        format,
        color: !cli.no_color && !no_color_env,
    })
}
