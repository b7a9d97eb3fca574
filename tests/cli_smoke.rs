#![allow(clippy::unwrap_used)]
//! CLI smoke tests driving the binary over piped stdin.
//!
//! None of these reach the network: they stop at the menu, fail during
//! startup, or abort a sub-mode before any request is sent.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `naija` command with an isolated config dir and working directory.
#[allow(deprecated)]
fn naija(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("naija").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join("config"))
        .env_remove("NAIJA_LOG");
    cmd
}

fn naija_with_key(temp_dir: &TempDir) -> Command {
    let mut cmd = naija(temp_dir);
    cmd.env("GEMINI_API_KEY", "test-key");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let temp_dir = TempDir::new().unwrap();
    naija(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nigerian Pidgin"))
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_version_displays_version() {
    let temp_dir = TempDir::new().unwrap();
    naija(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_quit_exits_successfully() {
    let temp_dir = TempDir::new().unwrap();
    naija_with_key(&temp_dir)
        .write_stdin("q\n")
        .assert()
        .code(exitcode::OK)
        .stdout(predicate::str::contains("API key loaded from environment"))
        .stdout(predicate::str::contains("MAIN MENU"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_invalid_choice_keeps_menu_running() {
    let temp_dir = TempDir::new().unwrap();
    naija_with_key(&temp_dir)
        .write_stdin("x\n9\nq\n")
        .assert()
        .code(exitcode::OK)
        .stdout(predicate::str::contains("Invalid choice. Try again."))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_end_of_input_is_a_failure() {
    let temp_dir = TempDir::new().unwrap();
    naija_with_key(&temp_dir)
        .write_stdin("1\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("TRANSLATION MODE"))
        .stdout(predicate::str::contains("Interrupted by user").not())
        .stderr(predicate::str::contains("end of input"));
}

#[test]
fn test_end_of_input_at_key_prompt_is_a_failure() {
    let temp_dir = TempDir::new().unwrap();
    naija(&temp_dir)
        .env_remove("GEMINI_API_KEY")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read input"));
}

#[test]
fn test_missing_api_key_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    naija(&temp_dir)
        .env_remove("GEMINI_API_KEY")
        .write_stdin("\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Gemini API Key Required"))
        .stderr(predicate::str::contains("No API key provided"));
}

#[test]
fn test_pasted_api_key_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    naija(&temp_dir)
        .env_remove("GEMINI_API_KEY")
        .write_stdin("pasted-key\nq\n")
        .assert()
        .code(exitcode::OK)
        .stdout(predicate::str::contains("Ready!"));

    // The key must not be persisted anywhere
    assert!(!temp_dir.path().join("config").exists());
}

#[test]
fn test_invalid_config_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config").join("naija");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[naija\n").unwrap();

    naija_with_key(&temp_dir)
        .write_stdin("q\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_config_model_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config").join("naija");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[naija]\nmodel = \"gemini-from-config\"\n",
    )
    .unwrap();

    naija_with_key(&temp_dir)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini-from-config"));

    naija_with_key(&temp_dir)
        .args(["--model", "gemini-from-cli"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini-from-cli"));
}

#[test]
fn test_batch_missing_input_returns_to_menu() {
    let temp_dir = TempDir::new().unwrap();
    naija_with_key(&temp_dir)
        .write_stdin("2\ndoes-not-exist.txt\nq\n")
        .assert()
        .code(exitcode::OK)
        .stdout(predicate::str::contains("File not found: does-not-exist.txt"))
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(!temp_dir.path().join("output.txt").exists());
}

#[test]
fn test_batch_invalid_direction_returns_to_menu() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("input.txt"), "hello\n").unwrap();

    naija_with_key(&temp_dir)
        .write_stdin("2\ninput.txt\n\nklingon\nq\n")
        .assert()
        .code(exitcode::OK)
        .stdout(predicate::str::contains("Invalid mode. Use 'pidgin' or 'english'"))
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(!temp_dir.path().join("output.txt").exists());
}

#[test]
fn test_translation_submode_back_to_menu() {
    let temp_dir = TempDir::new().unwrap();
    naija_with_key(&temp_dir)
        .write_stdin("1\n7\n1\n\nq\nq\n")
        .assert()
        .code(exitcode::OK)
        .stdout(predicate::str::contains("TRANSLATION MODE"))
        .stdout(predicate::str::contains("Invalid choice. Try again."))
        .stdout(predicate::str::contains("Thanks for using Naija-Voice!"))
        .stdout(predicate::str::contains("Goodbye!"));
}
