//! Integration tests for argument parsing and global CLI behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixtures_dir;

fn cuejump() -> Command {
    let mut cmd = Command::cargo_bin("cuejump").expect("binary exists");
    cmd.env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    cuejump()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_shows_package_version() {
    cuejump()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_usage_error() {
    cuejump()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    cuejump()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ============================================================================
// View Argument Validation
// ============================================================================

#[test]
fn view_requires_transcript_and_video() {
    cuejump()
        .arg("view")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn view_rejects_unknown_player_backend() {
    cuejump()
        .args(["view", "a.csv", "b.mp4", "--player", "vlc"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn view_fails_before_terminal_setup_when_video_is_missing() {
    let config_home = TempDir::new().unwrap();
    let transcript = fixtures_dir().join("sample.csv");

    // The video existence check runs before the terminal is taken over,
    // so this path works without a TTY.
    cuejump()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args([
            "view",
            transcript.to_str().unwrap(),
            "/nonexistent/video.mp4",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Video file not found"));
}

// ============================================================================
// Shell Completions
// ============================================================================

#[test]
fn completions_bash_emits_script() {
    cuejump()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cuejump"));
}

#[test]
fn completions_zsh_emits_script() {
    cuejump()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cuejump"));
}

#[test]
fn completions_rejects_unknown_shell() {
    cuejump()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
