//! Integration tests for the check command (CLI).

use crate::helpers::{fixtures_dir, run_cuejump, temp_transcript};

// ============================================================================
// Clean Transcripts
// ============================================================================

#[test]
fn check_reports_row_count_and_format_for_csv() {
    let fixture = fixtures_dir().join("sample.csv");
    let (stdout, _stderr, code) = run_cuejump(&["check", fixture.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(stdout.contains("4 rows (CSV)"), "stdout: {}", stdout);
    assert!(stdout.contains("All rows can seek."), "stdout: {}", stdout);
}

#[test]
fn check_output_is_plain_under_no_color() {
    // The helper runs every command with NO_COLOR=1.
    let fixture = fixtures_dir().join("sample.csv");
    let (stdout, _stderr, code) = run_cuejump(&["check", fixture.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(!stdout.contains('\x1b'), "stdout: {:?}", stdout);
}

#[test]
fn check_reports_timespan() {
    let fixture = fixtures_dir().join("sample.csv");
    let (stdout, _stderr, code) = run_cuejump(&["check", fixture.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(
        stdout.contains("Start times cover 00:00 to 01:02:03"),
        "stdout: {}",
        stdout
    );
}

#[test]
fn check_accepts_json_records() {
    let fixture = fixtures_dir().join("sample.json");
    let (stdout, _stderr, code) = run_cuejump(&["check", fixture.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(stdout.contains("3 rows (JSON)"), "stdout: {}", stdout);
    assert!(stdout.contains("All rows can seek."), "stdout: {}", stdout);
}

#[test]
fn check_accepts_json_column_tables() {
    let fixture = fixtures_dir().join("columns.json");
    let (stdout, _stderr, code) = run_cuejump(&["check", fixture.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(stdout.contains("2 rows (JSON)"), "stdout: {}", stdout);
    assert!(stdout.contains("All rows can seek."), "stdout: {}", stdout);
}

// ============================================================================
// Problem Reporting
// ============================================================================

#[test]
fn check_lists_rows_with_problems() {
    let fixture = fixtures_dir().join("malformed.csv");
    let (stdout, _stderr, code) = run_cuejump(&["check", fixture.to_str().unwrap()]);

    // Findings alone never fail the command without --strict.
    assert_eq!(code, 0);

    // Row numbers match the 1-based listing the table and --verbose use.
    assert!(
        stdout.contains("Row 2 is missing a \"Start Time\" value"),
        "stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("Row 3 is missing a \"Text\" value"),
        "stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("Row 4: Invalid time format: abc"),
        "stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("(would seek to 00:00)"),
        "stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("3 of 5 rows have problems"),
        "stdout: {}",
        stdout
    );
}

#[test]
fn check_strict_fails_on_problems() {
    let fixture = fixtures_dir().join("malformed.csv");
    let (_stdout, stderr, code) = run_cuejump(&["check", "--strict", fixture.to_str().unwrap()]);

    assert_eq!(code, 1);
    assert!(
        stderr.contains("3 rows cannot seek cleanly"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn check_strict_passes_on_clean_transcript() {
    let fixture = fixtures_dir().join("sample.csv");
    let (_stdout, _stderr, code) = run_cuejump(&["check", "--strict", fixture.to_str().unwrap()]);

    assert_eq!(code, 0);
}

// ============================================================================
// Verbose Listing
// ============================================================================

#[test]
fn check_verbose_lists_every_row() {
    let fixture = fixtures_dir().join("sample.csv");
    let (stdout, _stderr, code) =
        run_cuejump(&["check", "--verbose", fixture.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Welcome and introductions"), "stdout: {}", stdout);
    assert!(stdout.contains("Closing remarks"), "stdout: {}", stdout);
    // Offsets render normalized, not as the raw source strings.
    assert!(stdout.contains("01:02:03"), "stdout: {}", stdout);
}

#[test]
fn check_verbose_marks_incomplete_rows() {
    let fixture = fixtures_dir().join("malformed.csv");
    let (stdout, _stderr, code) =
        run_cuejump(&["check", "--verbose", fixture.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(stdout.contains("(incomplete row)"), "stdout: {}", stdout);
}

// ============================================================================
// Column Overrides
// ============================================================================

#[test]
fn check_honors_column_overrides() {
    let (_dir, path) = temp_transcript(
        "renamed.csv",
        "ts,line\n00:05,first\n00:10,second\n",
    );
    let (stdout, _stderr, code) = run_cuejump(&[
        "check",
        "--start-column",
        "ts",
        "--text-column",
        "line",
        path.to_str().unwrap(),
    ]);

    assert_eq!(code, 0);
    assert!(stdout.contains("2 rows (CSV)"), "stdout: {}", stdout);
    assert!(stdout.contains("All rows can seek."), "stdout: {}", stdout);
}

#[test]
fn check_without_matching_columns_reports_every_row() {
    let (_dir, path) = temp_transcript(
        "other.csv",
        "ts,line\n00:05,first\n",
    );
    let (stdout, _stderr, code) = run_cuejump(&["check", path.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(
        stdout.contains("1 of 1 rows have problems"),
        "stdout: {}",
        stdout
    );
}

// ============================================================================
// Load Failures
// ============================================================================

#[test]
fn check_missing_file_fails() {
    let (_stdout, stderr, code) = run_cuejump(&["check", "/nonexistent/transcript.csv"]);

    assert_eq!(code, 1);
    assert!(
        stderr.contains("Failed to read transcript file"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn check_rejects_unknown_extension() {
    let (_dir, path) = temp_transcript("notes.txt", "Start Time,Text\n00:01,hi\n");
    let (_stdout, stderr, code) = run_cuejump(&["check", path.to_str().unwrap()]);

    assert_eq!(code, 1);
    assert!(
        stderr.contains("Unsupported transcript format"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn check_rejects_invalid_json() {
    let (_dir, path) = temp_transcript("broken.json", "{not json");
    let (_stdout, stderr, code) = run_cuejump(&["check", path.to_str().unwrap()]);

    assert_eq!(code, 1);
    assert!(
        stderr.contains("Failed to parse JSON transcript"),
        "stderr: {}",
        stderr
    );
}
