//! Field-level merge rule, applied identically at every layer.

use crate::config::{Config, LogLevel, Overlay, UnknownLogLevel};

/// Replace `slot` when `incoming` is present; leave it alone otherwise.
fn overwrite<T: Clone>(slot: &mut T, incoming: Option<&T>) {
    if let Some(value) = incoming {
        *slot = value.clone();
    }
}

impl Config {
    /// Apply the fields present in `overlay`.
    ///
    /// Absent fields keep their current value; present fields are replaced, including
    /// with an empty path. An unknown `log-level` token sets INFO and is returned so
    /// the caller can report it.
    pub fn update(&mut self, overlay: &Overlay) -> Option<UnknownLogLevel> {
        overwrite(&mut self.cert_file, overlay.cert_file.as_ref());
        overwrite(&mut self.key_file, overlay.key_file.as_ref());
        overwrite(&mut self.ca_dir, overlay.ca_dir.as_ref());

        let token = overlay.log_level.as_deref()?;
        match token.parse::<LogLevel>() {
            Ok(level) => {
                self.log_level = level;
                None
            }
            Err(unknown) => {
                self.log_level = LogLevel::Info;
                Some(unknown)
            }
        }
    }
}
