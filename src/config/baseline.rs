//! Embedded baseline configuration.

use super::document::{parse_overlay, Overlay};

/// Default configuration compiled into the binary. Defines every recognized key.
pub const DEFAULT_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/etc/config.toml"
));

/// Parse the embedded baseline.
///
/// # Panics
///
/// Panics if the embedded document does not parse. That can only happen with a
/// broken build artifact.
pub fn overlay() -> Overlay {
    parse_overlay(DEFAULT_CONFIG, "embedded defaults")
        .unwrap_or_else(|e| panic!("failed to parse embedded defaults: {e}"))
}
