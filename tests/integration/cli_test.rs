//! Integration tests for the minutes CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, load_fixture};

/// Build a minutes command isolated from the user's config directory.
fn minutes_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_minutes"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to run minutes and capture output
fn run_minutes(args: &[&str]) -> (String, String, i32) {
    let home = TempDir::new().unwrap();
    let output = minutes_cmd(&home)
        .args(args)
        .output()
        .expect("Failed to execute minutes");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run_minutes(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("markdown minutes"));
    assert!(stdout.contains("[FILE]"));
    assert!(stdout.contains("--log-url"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_minutes(&["--bogus"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--bogus"));
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn converts_file_to_stdout() {
    let path = fixtures_dir().join("minimal.txt");
    let (stdout, _stderr, exit_code) = run_minutes(&[
        path.to_str().unwrap(),
        "--log-url",
        "https://example.org/irc",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[IRC Log](https://example.org/irc)"));
    assert!(stdout.contains("### [1. Intro](id:section1)"));
}

#[test]
fn reads_stdin_when_no_file_given() {
    let home = TempDir::new().unwrap();

    minutes_cmd(&home)
        .write_stdin(load_fixture("minimal.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("**Present:** alice"))
        .stdout(predicate::str::contains("[IRC Log]()"));
}

#[test]
fn dash_reads_stdin() {
    let home = TempDir::new().unwrap();

    minutes_cmd(&home)
        .arg("-")
        .write_stdin("10:00 <bob> hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("> **bob:** hello"));
}

#[test]
fn writes_output_file() {
    let home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("minutes.md");

    minutes_cmd(&home)
        .arg(fixtures_dir().join("minimal.txt"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("* [2. Resolutions](#res)"));
}

#[test]
fn headers_flag_prints_json() {
    let path = fixtures_dir().join("weekly.txt");
    let (stdout, _stderr, exit_code) = run_minutes(&[path.to_str().unwrap(), "--headers"]);

    assert_eq!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["present"], "alice, bob, carol");
    assert_eq!(json["meeting"], "Weekly WG Call");
    assert_eq!(json["date"], "01 March 2024");
    assert_eq!(json["scribe"], "alice");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_input_file_exits_1_with_path() {
    let (_stdout, stderr, exit_code) = run_minutes(&["/no/such/transcript.txt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read transcript"));
    assert!(stderr.contains("/no/such/transcript.txt"));
}

#[test]
fn invalid_config_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[header\n").unwrap();

    let (_stdout, stderr, exit_code) =
        run_minutes(&["--config", config.to_str().unwrap(), "--show-config"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config file"));
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn show_config_prints_defaults() {
    let (stdout, _stderr, exit_code) = run_minutes(&["--show-config"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[header]"));
    assert!(stdout.contains("logo_url = \"https://www.w3.org/Icons/w3c_home\""));
}

#[test]
#[cfg(target_os = "linux")]
fn config_from_default_location_sets_logo() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("minutes");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[header]\nlogo_url = \"https://example.org/logo.svg\"\nlogo_alt = \"Example\"\n",
    )
    .unwrap();

    minutes_cmd(&home)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "![Example](https://example.org/logo.svg)",
        ));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let home = TempDir::new().unwrap();

    minutes_cmd(&home)
        .arg("--verbose")
        .write_stdin(load_fixture("minimal.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("![W3C Logo]"))
        .stderr(predicate::str::contains("normalized transcript"));
}
