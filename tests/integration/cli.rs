//! End-to-end tests for the rhc binary.

use super::test_utils::ConfigDir;
use std::process::{Command, Output};

fn rhc(dir: &ConfigDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rhc"))
        .env_remove("RHC_LOG")
        .env_remove("RHC_LOG_FORMAT")
        .arg("--config")
        .arg(&dir.main)
        .arg("--drop-in-dir")
        .arg(&dir.drop_in_dir)
        .arg("--no-color")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_config_show_prints_effective_values() {
    let dir = ConfigDir::new();
    dir.write_main("cert-file = \"/etc/rhc/main.pem\"\n");
    dir.write_drop_in("10-key.toml", "key-file = \"/etc/rhc/dropin.key\"\n");

    let output = rhc(&dir, &["config", "show"]);
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cert-file = \"/etc/rhc/main.pem\""), "{stdout}");
    assert!(stdout.contains("key-file = \"/etc/rhc/dropin.key\""), "{stdout}");
    assert!(stdout.contains("log-level = \"INFO\""), "{stdout}");
}

#[test]
fn test_command_line_flags_override_files() {
    let dir = ConfigDir::new();
    dir.write_main("cert-file = \"/etc/rhc/main.pem\"\n");

    let output = rhc(
        &dir,
        &["--cert-file", "/cli.pem", "config", "show", "--format", "json"],
    );
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["cert-file"], "/cli.pem");
}

#[test]
fn test_config_show_falls_back_on_broken_file() {
    let dir = ConfigDir::new();
    dir.write_main("cert-file = \"/etc/rhc/main.pem\"\n");
    dir.write_drop_in("10-bad.toml", "log-level = \n");

    let output = rhc(&dir, &["config", "show", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["cert-file"], "");
    assert_eq!(value["log-level"], "INFO");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("10-bad.toml"), "stderr={stderr}");
}

#[test]
fn test_config_check_fails_loud() {
    let dir = ConfigDir::new();
    dir.write_drop_in("10-ok.toml", "ca-dir = \"/ok\"\n");
    dir.write_drop_in("20-bad.toml", "ca-dir = [\n");

    let output = rhc(&dir, &["config", "check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("20-bad.toml"), "stderr={stderr}");
    assert!(stderr.contains("10-ok.toml"), "stderr={stderr}");
}

#[test]
fn test_invalid_log_level_flag_is_reported_not_fatal() {
    let dir = ConfigDir::new();

    let output = rhc(&dir, &["--log-level", "LOUD", "config", "show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("log-level = \"INFO\""), "{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid log level 'LOUD' set via command line"),
        "stderr={stderr}"
    );
}
