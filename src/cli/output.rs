//! CLI output: rendering of the effective configuration and error mapping.

use crate::config::{Layer, Resolution};
use crate::error::RhcError;
use serde_json::json;
use std::path::Path;

fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

fn path_value(path: &Path) -> String {
    quoted(&path.display().to_string())
}

/// Render the configuration as a TOML document.
///
/// With `origins`, each line carries a comment naming the layer that set it.
pub fn format_config_text(resolution: &Resolution, origins: bool) -> String {
    let config = &resolution.config;
    let rows: [(&str, String, &Layer); 4] = [
        ("cert-file", path_value(&config.cert_file), &resolution.origins.cert_file),
        ("key-file", path_value(&config.key_file), &resolution.origins.key_file),
        ("log-level", quoted(config.log_level.as_str()), &resolution.origins.log_level),
        ("ca-dir", path_value(&config.ca_dir), &resolution.origins.ca_dir),
    ];

    let mut out = String::new();
    for (key, value, layer) in rows {
        if origins {
            out.push_str(&format!("{} = {}  # {}\n", key, value, layer));
        } else {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out.pop();
    out
}

/// Render the configuration as JSON
pub fn format_config_json(resolution: &Resolution, origins: bool) -> Result<String, RhcError> {
    let value = if origins {
        json!({
            "config": resolution.config,
            "origins": resolution.origins,
            "layers": resolution.layers,
        })
    } else {
        serde_json::to_value(&resolution.config)?
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Map errors to a string for CLI output.
pub fn map_error(e: &RhcError) -> String {
    match e {
        RhcError::Resolve(err) => {
            let applied: Vec<String> = err
                .partial_resolution()
                .layers
                .iter()
                .map(|layer| layer.to_string())
                .collect();
            format!("{}\napplied before failure: {}", err, applied.join(", "))
        }
        other => other.to_string(),
    }
}
