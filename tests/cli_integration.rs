//! Integration tests for the notifier binary
//!
//! Each test runs the built binary inside its own temp directory, with config
//! and data directories redirected so the user's setup never leaks in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to run notifier inside `dir`
fn run_notifier(dir: &Path, args: &[&str]) -> Output {
    run_notifier_with_env(dir, args, &[])
}

fn run_notifier_with_env(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_notifier"));
    command
        .current_dir(dir)
        .env("NOTIFIER_DIR", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env_remove("NOTIFIER_CONFIG")
        .env_remove("RUST_LOG")
        .args(args);

    for (key, value) in envs {
        command.env(key, value);
    }

    command.output().expect("Failed to execute notifier")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_demo_writes_console_and_both_files() {
    let temp = TempDir::new().unwrap();

    let output = run_notifier(temp.path(), &["demo"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    assert_eq!(
        stdout(&output),
        "Warning: This is a warning message\nFatal Error: This is a fatal error message\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("errors.log")).unwrap(),
        "Error: This is an error message\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("fatal_errors.log")).unwrap(),
        "Fatal Error: This is a fatal error message\n"
    );
}

#[test]
fn test_demo_twice_appends() {
    let temp = TempDir::new().unwrap();

    assert!(run_notifier(temp.path(), &["demo"]).status.success());
    assert!(run_notifier(temp.path(), &["demo"]).status.success());

    let errors = fs::read_to_string(temp.path().join("errors.log")).unwrap();
    assert_eq!(errors.lines().count(), 2);
    assert!(errors.lines().all(|line| line == "Error: This is an error message"));
}

#[test]
fn test_emit_warning_touches_no_files() {
    let temp = TempDir::new().unwrap();

    let output = run_notifier(temp.path(), &["emit", "warning", "low", "disk"]);
    assert!(output.status.success());

    assert_eq!(stdout(&output), "Warning: low disk\n");
    assert!(!temp.path().join("errors.log").exists());
    assert!(!temp.path().join("fatal_errors.log").exists());
}

#[test]
fn test_emit_error_uses_configured_path() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom-errors.log");
    fs::write(
        temp.path().join("notifier.yaml"),
        format!("sinks:\n  error_log: {}\n", custom.display()),
    )
    .unwrap();

    let output = run_notifier(temp.path(), &["emit", "error", "e1"]);
    assert!(output.status.success());

    assert!(stdout(&output).is_empty());
    assert_eq!(fs::read_to_string(&custom).unwrap(), "Error: e1\n");
    assert!(!temp.path().join("errors.log").exists());
}

#[test]
fn test_emit_error_to_missing_directory_is_silent() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.yaml");
    fs::write(&config, "sinks:\n  error_log: no-such-dir/errors.log\n").unwrap();

    let output = run_notifier(temp.path(), &["--config", config.to_str().unwrap(), "emit", "error", "x"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(!temp.path().join("no-such-dir").exists());
}

#[test]
fn test_fatal_console_survives_missing_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("notifier.yaml"),
        "sinks:\n  fatal_log: no-such-dir/fatal.log\n",
    )
    .unwrap();

    let output = run_notifier(temp.path(), &["emit", "fatal", "z"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Fatal Error: z\n");
}

#[test]
fn test_skipped_write_is_recorded_in_diagnostic_log() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("notifier.yaml"),
        "log_level: debug\nsinks:\n  error_log: no-such-dir/errors.log\n",
    )
    .unwrap();

    let output = run_notifier(temp.path(), &["emit", "error", "x"]);
    assert!(output.status.success());

    let log = fs::read_to_string(temp.path().join("data/notifier/logs/notifier.log")).unwrap();
    assert!(log.contains("write skipped"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_rust_log_overrides_config_level() {
    let temp = TempDir::new().unwrap();

    let output = run_notifier_with_env(temp.path(), &["demo"], &[("RUST_LOG", "off")]);
    assert!(output.status.success());

    let log = fs::read_to_string(temp.path().join("data/notifier/logs/notifier.log")).unwrap();
    assert!(log.is_empty());
}

#[test]
fn test_config_get() {
    let temp = TempDir::new().unwrap();

    let output = run_notifier(temp.path(), &["config", "get", "sinks.fatal_log"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "fatal_errors.log");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    let output = run_notifier(temp.path(), &["config", "get", "nope"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_show_yaml() {
    let temp = TempDir::new().unwrap();

    let output = run_notifier(temp.path(), &["config", "show", "-o", "yaml"]);
    assert!(output.status.success());

    let shown = stdout(&output);
    assert!(shown.contains("error_log: errors.log"));
    assert!(shown.contains("log_level: info"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.yaml");
    fs::write(&config, "log_level: [not, a, level]\n").unwrap();

    let output = run_notifier(temp.path(), &["--config", config.to_str().unwrap(), "demo"]);
    assert!(!output.status.success());
    assert!(!temp.path().join("errors.log").exists());
}

#[test]
fn test_unusable_diagnostic_dir_still_notifies() {
    let temp = TempDir::new().unwrap();
    let not_a_dir = temp.path().join("data-file");
    fs::write(&not_a_dir, "").unwrap();

    let output = run_notifier_with_env(temp.path(), &["demo"], &[("XDG_DATA_HOME", not_a_dir.to_str().unwrap())]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Warning: This is a warning message\nFatal Error: This is a fatal error message\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("diagnostics disabled"));
    assert_eq!(
        fs::read_to_string(temp.path().join("errors.log")).unwrap(),
        "Error: This is an error message\n"
    );
}

#[test]
fn test_broken_discovered_config_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notifier.yaml"), "sinks: [oops\n").unwrap();

    let output = run_notifier(temp.path(), &["demo"]);
    assert!(output.status.success());

    let log = fs::read_to_string(temp.path().join("data/notifier/logs/notifier.log")).unwrap();
    assert!(log.contains("Failed to load config from NOTIFIER_DIR"));
    assert!(temp.path().join("errors.log").exists());
}

#[test]
fn test_rust_log_level_is_reported() {
    let temp = TempDir::new().unwrap();

    let output = run_notifier_with_env(temp.path(), &["demo"], &[("RUST_LOG", "debug")]);
    assert!(output.status.success());

    let log = fs::read_to_string(temp.path().join("data/notifier/logs/notifier.log")).unwrap();
    assert!(log.contains("Log level: debug (from RUST_LOG env)"));
}

#[test]
fn test_emit_message_with_leading_hyphen() {
    let temp = TempDir::new().unwrap();

    let output = run_notifier(temp.path(), &["emit", "warning", "-5", "degrees"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Warning: -5 degrees\n");
}
