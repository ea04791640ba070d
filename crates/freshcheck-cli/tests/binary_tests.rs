//! Binary execution tests for `fresh`
//!
//! Each run gets an empty HOME and working directory so no user or
//! project configuration leaks in.

use std::process::{Command, Output};

use tempfile::TempDir;

fn fresh(args: &[&str]) -> (Output, TempDir) {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_fresh"))
        .args(args)
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("ANTHROPIC_API_KEY", "")
        .env_remove("RUST_LOG")
        .env_remove("FRESHCHECK_MODEL")
        .env_remove("FRESHCHECK_BASE_URL")
        .output()
        .expect("failed to run fresh");
    (output, dir)
}

#[test]
fn test_help_lists_commands() {
    let (output, _dir) = fresh(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["analyze", "shell", "info"] {
        assert!(stdout.contains(command), "missing {} in help", command);
    }
}

#[test]
fn test_version() {
    let (output, _dir) = fresh(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("fresh "));
}

#[test]
fn test_info_prints_catalog() {
    let (output, _dir) = fresh(&["info"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("broccoli"));
    assert!(stdout.contains("When in doubt, throw it out."));
}

#[test]
fn test_analyze_without_api_key_fails_with_hint() {
    let (output, _dir) = fresh(&["analyze", "apple.jpg"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ANTHROPIC_API_KEY is not set"));
    assert!(stderr.contains(".env"));
    assert!(!stderr.contains("Details:"));
}

#[test]
fn test_verbose_failure_prints_details() {
    let (output, _dir) = fresh(&["--verbose", "analyze", "apple.jpg"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ANTHROPIC_API_KEY is not set"));
    assert!(stderr.contains("Details: Config("));
}

#[test]
fn test_missing_explicit_config_fails() {
    let (output, _dir) = fresh(&["--config", "nope.yaml", "info"]);
    // info never loads configuration
    assert!(output.status.success());

    let (output, _dir) = fresh(&["analyze", "x.png", "--config", "nope.yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config file not found"));
}
