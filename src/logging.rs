//! Logging System
//!
//! Structured logging using the `tracing` crate. The verbosity comes from the
//! resolved `log-level`; output goes to stderr so command output on stdout stays
//! machine readable.

use crate::config::LogLevel;
use crate::error::RhcError;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full `EnvFilter` directive; wins over `log-level`
pub const LOG_FILTER_ENV: &str = "RHC_LOG";

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "RHC_LOG_FORMAT";

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = RhcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(RhcError::Logging(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            ))),
        }
    }
}

/// Logging options that are not part of the layered configuration
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    pub format: LogFormat,
    /// Enable colored output (text format only)
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            color: true,
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `RHC_LOG` / `RHC_LOG_FORMAT` environment variables
/// 2. `level` and `options`
pub fn init_logging(level: LogLevel, options: &LoggingOptions) -> Result<(), RhcError> {
    let filter = build_env_filter(level);
    let format = determine_format(options);

    let base_subscriber = Registry::default().with(filter);

    let result = match format {
        LogFormat::Json => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(options.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| RhcError::Logging(format!("Failed to install subscriber: {}", e)))
}

/// `RHC_LOG` if it parses, otherwise the resolved level
fn build_env_filter(level: LogLevel) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_FILTER_ENV) {
        return filter;
    }
    EnvFilter::default().add_directive(LevelFilter::from(level).into())
}

fn determine_format(options: &LoggingOptions) -> LogFormat {
    std::env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|format| format.parse().ok())
        .unwrap_or(options.format)
}
