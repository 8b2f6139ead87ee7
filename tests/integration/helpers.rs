//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the checked-in fixture transcripts.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load a fixture file as a string.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// Write `content` to `name` inside a fresh temp directory.
///
/// Returns the directory guard alongside the file path; dropping the
/// guard removes the file.
pub fn temp_transcript(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp transcript");
    (dir, path)
}

/// Run the cuejump binary and capture output.
///
/// `XDG_CONFIG_HOME` points at an empty temp directory so runs never
/// pick up a developer's real config file.
pub fn run_cuejump(args: &[&str]) -> (String, String, i32) {
    let config_home = TempDir::new().expect("Failed to create temp config dir");
    run_cuejump_with_config_home(args, config_home.path())
}

/// Run the cuejump binary with an explicit config home.
pub fn run_cuejump_with_config_home(args: &[&str], config_home: &Path) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_cuejump"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", config_home)
        .output()
        .expect("Failed to execute cuejump");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}
