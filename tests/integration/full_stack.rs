//! Defaults < main file < drop-ins (in order)

use super::test_utils::ConfigDir;
use rhc::config::{ConfigSource, Diagnostic, Layer, LogLevel, Resolution};
use rhc::error::ConfigError;
use std::path::{Path, PathBuf};

#[test]
fn test_full_configuration_stack() {
    let dir = ConfigDir::new();
    dir.write_main(
        r#"
cert-file = "/etc/rhc/main.pem"
log-level = "INFO"
ca-dir = "/etc/pki/tls/certs"
"#,
    );
    // Written out of order; application order is by filename
    let cadir = dir.write_drop_in("30-cadir.toml", r#"ca-dir = "/custom/certs""#);
    let key = dir.write_drop_in("10-key.toml", r#"key-file = "/etc/rhc/dropin.key""#);
    let debug = dir.write_drop_in("20-debug.toml", r#"log-level = "DEBUG""#);

    let resolution = dir.source().resolve().unwrap();
    let config = &resolution.config;
    assert_eq!(config.cert_file, PathBuf::from("/etc/rhc/main.pem"));
    assert_eq!(config.key_file, PathBuf::from("/etc/rhc/dropin.key"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.ca_dir, PathBuf::from("/custom/certs"));

    assert_eq!(
        resolution.layers,
        vec![
            Layer::Baseline,
            Layer::MainFile(dir.main.clone()),
            Layer::DropIn(key),
            Layer::DropIn(debug.clone()),
            Layer::DropIn(cadir),
        ]
    );
    assert_eq!(resolution.origins.log_level, Layer::DropIn(debug));
}

#[test]
fn test_later_drop_in_shadows_earlier() {
    let dir = ConfigDir::new();
    dir.write_main(r#"log-level = "INFO""#);
    dir.write_drop_in("10-first.toml", r#"log-level = "WARN""#);
    dir.write_drop_in("20-second.toml", r#"log-level = "DEBUG""#);

    let config = dir.source().read().unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_no_files_equals_baseline() {
    let dir = ConfigDir::new();
    let config = dir.source().read().unwrap();
    assert_eq!(config, Resolution::baseline().config);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.cert_file, PathBuf::new());
    assert_eq!(config.key_file, PathBuf::new());
    assert_eq!(config.ca_dir, PathBuf::new());
}

#[test]
fn test_drop_ins_apply_without_main_file() {
    let dir = ConfigDir::new();
    dir.write_drop_in("50-cert.toml", r#"cert-file = "/only/dropin.pem""#);

    let config = dir.source().read().unwrap();
    assert_eq!(config.cert_file, PathBuf::from("/only/dropin.pem"));
}

#[test]
fn test_malformed_drop_in_fails_loud() {
    let dir = ConfigDir::new();
    dir.write_drop_in("10-ok.toml", r#"cert-file = "/ok.pem""#);
    dir.write_drop_in("20-bad.toml", "cert-file = \"/bad.pem\"\nkey-file = [");
    dir.write_drop_in("30-after.toml", r#"ca-dir = "/after""#);

    let err = dir.source().read().unwrap_err();
    assert!(matches!(err.cause(), ConfigError::Parse { .. }));
    assert_eq!(err.partial().cert_file, PathBuf::from("/ok.pem"));
    assert_eq!(err.partial().key_file, PathBuf::new());
    assert_eq!(err.partial().ca_dir, PathBuf::new());
    assert!(err.to_string().contains("20-bad.toml"));
}

#[test]
fn test_unknown_keys_in_drop_in_are_ignored() {
    let dir = ConfigDir::new();
    dir.write_drop_in("10-future.toml", "base-url = \"https://example.com\"\nlog-level = \"WARN\"");

    let config = dir.source().read().unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
fn test_invalid_level_token_is_lenient() {
    let dir = ConfigDir::new();
    dir.write_main(r#"log-level = "DEBUG""#);
    dir.write_drop_in("10-typo.toml", r#"log-level = "DEBGU""#);

    let resolution = dir.source().resolve().unwrap();
    assert_eq!(resolution.config.log_level, LogLevel::Info);
    assert_eq!(resolution.diagnostics.len(), 1);
    assert!(resolution.diagnostics[0].to_string().contains("DEBGU"));
}

#[test]
fn test_lowercase_level_in_drop_in_is_invalid() {
    let dir = ConfigDir::new();
    dir.write_main(r#"log-level = "ERROR""#);
    let drop_in = dir.write_drop_in("10.toml", r#"log-level = "debug""#);

    let resolution = dir.source().resolve().unwrap();
    assert_eq!(resolution.config.log_level, LogLevel::Info);
    assert_eq!(
        resolution.diagnostics,
        vec![Diagnostic::InvalidLogLevel {
            token: "debug".to_string(),
            layer: Layer::DropIn(drop_in),
        }]
    );
}

#[test]
fn test_drop_in_dir_that_is_a_file_is_an_error() {
    let dir = ConfigDir::new();
    let not_a_dir = dir.root().join("plain-file");
    std::fs::write(&not_a_dir, "").unwrap();

    let err = ConfigSource::new(&dir.main, &not_a_dir).read().unwrap_err();
    assert!(matches!(err.cause(), ConfigError::NotADirectory { .. }));
}

#[test]
fn test_independent_sources_resolve_concurrently() {
    let dirs: Vec<ConfigDir> = (0..4).map(|_| ConfigDir::new()).collect();
    for (i, dir) in dirs.iter().enumerate() {
        dir.write_drop_in("10.toml", &format!("ca-dir = \"/certs/{}\"", i));
    }

    std::thread::scope(|scope| {
        let handles: Vec<_> = dirs
            .iter()
            .map(|dir| scope.spawn(move || dir.source().read().unwrap()))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let config = handle.join().unwrap();
            assert_eq!(config.ca_dir, Path::new("/certs").join(i.to_string()));
        }
    });
}
