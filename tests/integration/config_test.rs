//! Integration tests for the config command (CLI).
//!
//! Tests that touch the config file location pin `XDG_CONFIG_HOME` to a
//! temp directory, which only redirects the lookup on Linux.

use crate::helpers::{run_cuejump, run_cuejump_with_config_home};

#[cfg(target_os = "linux")]
use tempfile::TempDir;

// ============================================================================
// Show and Path
// ============================================================================

#[test]
fn config_path_prints_config_toml_location() {
    let (stdout, _stderr, code) = run_cuejump(&["config", "path"]);

    assert_eq!(code, 0);
    let path = stdout.trim();
    assert!(path.ends_with("config.toml"), "path: {}", path);
    assert!(path.contains("cuejump"), "path: {}", path);
}

#[test]
fn config_show_prints_all_sections() {
    let (stdout, _stderr, code) = run_cuejump(&["config", "show"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("[transcript]"), "stdout: {}", stdout);
    assert!(stdout.contains("[player]"), "stdout: {}", stdout);
    assert!(stdout.contains("[ui]"), "stdout: {}", stdout);
    assert!(stdout.contains("start_time_column"), "stdout: {}", stdout);
}

#[cfg(target_os = "linux")]
#[test]
fn config_path_honors_xdg_config_home() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, code) = run_cuejump_with_config_home(&["config", "path"], home.path());

    assert_eq!(code, 0);
    assert!(
        stdout.trim().starts_with(home.path().to_str().unwrap()),
        "stdout: {}",
        stdout
    );
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg(target_os = "linux")]
#[test]
fn migrate_without_tty_makes_no_changes() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, code) =
        run_cuejump_with_config_home(&["config", "migrate"], home.path());

    // stdin is a pipe here, so the confirmation prompt declines itself.
    assert_eq!(code, 0);
    assert!(
        stdout.contains("Config file does not exist"),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("Non-interactive mode"), "stdout: {}", stdout);
    assert!(stdout.contains("No changes made."), "stdout: {}", stdout);
    assert!(!home.path().join("cuejump/config.toml").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn migrate_yes_creates_config_file() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, code) =
        run_cuejump_with_config_home(&["config", "migrate", "--yes"], home.path());

    assert_eq!(code, 0);
    assert!(
        stdout.contains("Config file created successfully."),
        "stdout: {}",
        stdout
    );

    let config_path = home.path().join("cuejump/config.toml");
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("start_time_column"), "content: {}", content);
    assert!(content.contains("[player]"), "content: {}", content);
    assert!(content.contains("[ui]"), "content: {}", content);
}

#[cfg(target_os = "linux")]
#[test]
fn migrate_is_idempotent() {
    let home = TempDir::new().unwrap();
    run_cuejump_with_config_home(&["config", "migrate", "--yes"], home.path());

    let (stdout, _stderr, code) =
        run_cuejump_with_config_home(&["config", "migrate"], home.path());

    assert_eq!(code, 0);
    assert!(
        stdout.contains("Config is already up to date."),
        "stdout: {}",
        stdout
    );
}

#[cfg(target_os = "linux")]
#[test]
fn migrate_yes_fills_partial_config_and_keeps_user_values() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("cuejump");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[transcript]\nstart_time_column = \"ts\"\n",
    )
    .unwrap();

    let (stdout, _stderr, code) =
        run_cuejump_with_config_home(&["config", "migrate", "--yes"], home.path());

    assert_eq!(code, 0);
    assert!(stdout.contains("missing field"), "stdout: {}", stdout);
    assert!(
        stdout.contains("Config updated successfully."),
        "stdout: {}",
        stdout
    );

    let content = std::fs::read_to_string(config_dir.join("config.toml")).unwrap();
    assert!(
        content.contains("start_time_column = \"ts\""),
        "content: {}",
        content
    );
    assert!(content.contains("text_column"), "content: {}", content);
    assert!(content.contains("[player]"), "content: {}", content);
    assert!(content.contains("[ui]"), "content: {}", content);
}
