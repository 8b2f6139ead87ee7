//! Check command handler
//!
//! Loads a transcript and reports the rows that cannot drive a clean
//! seek: rows missing a field and rows whose timestamp falls back to
//! zero. With `--strict` any finding makes the command fail, for use in
//! scripts and CI.

use std::path::PathBuf;

use anyhow::{bail, Result};

use cuejump::transcript::{format_seconds, parse_timestamp, Row, RowError, Transcript};
use cuejump::tui::{current_theme, set_theme, Theme};
use cuejump::Config;

pub fn handle_check(
    transcript_path: PathBuf,
    strict: bool,
    verbose: bool,
    start_column: Option<String>,
    text_column: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    set_theme(Theme::from_name(&config.ui.theme));
    let theme = current_theme();

    let mut columns = config.columns();
    if let Some(name) = start_column {
        columns.start_time = name;
    }
    if let Some(name) = text_column {
        columns.text = name;
    }

    let transcript = Transcript::load(&transcript_path, &columns)?;

    println!(
        "{}",
        theme.primary_text(&format!(
            "{}: {} rows ({})",
            transcript_path.display(),
            transcript.len(),
            transcript.format().name()
        ))
    );
    if let Some((first, last)) = transcript.timespan() {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "Start times cover {} to {}",
                format_seconds(first),
                format_seconds(last)
            ))
        );
    }

    if verbose {
        println!();
        for (index, row) in transcript.rows().iter().enumerate() {
            print_row(&theme, index, row);
        }
    }

    let missing = transcript.malformed();
    let unparsable = unparsable_rows(&transcript);

    if !missing.is_empty() || !unparsable.is_empty() {
        println!();
        for (_, error) in &missing {
            println!("{}", theme.error_text(&error.to_string()));
        }
        for (index, error) in &unparsable {
            println!(
                "{}",
                theme.error_text(&format!("Row {}: {} (would seek to 00:00)", index + 1, error))
            );
        }
    }

    let problem_rows = missing.len() + unparsable.len();
    println!();
    if problem_rows == 0 {
        println!("{}", theme.success_text("All rows can seek."));
        return Ok(());
    }

    println!(
        "{}",
        theme.primary_text(&format!(
            "{} of {} rows have problems",
            problem_rows,
            transcript.len()
        ))
    );
    if strict {
        bail!("{} rows cannot seek cleanly", problem_rows);
    }
    Ok(())
}

/// Complete rows whose timestamp still fails to parse.
fn unparsable_rows(transcript: &Transcript) -> Vec<(usize, RowError)> {
    let mut result = Vec::new();
    for (index, row) in transcript.rows().iter().enumerate() {
        if !row.is_complete() {
            continue;
        }
        let Some(text) = row.start_time.as_deref() else {
            continue;
        };
        if let Err(error) = parse_timestamp(text) {
            result.push((index, error));
        }
    }
    result
}

/// One verbose listing line: row number, resolved offset, text.
fn print_row(theme: &Theme, index: usize, row: &Row) {
    let number = format!("{:>4}", index + 1);
    match (row.start_time.as_deref(), row.text.as_deref()) {
        (Some(time), Some(text)) => match parse_timestamp(time) {
            Ok(seconds) => println!(
                "{}  {}  {}",
                theme.secondary_text(&number),
                theme.accent_text(&format!("{:>12}", format_seconds(seconds))),
                theme.primary_text(text)
            ),
            Err(_) => println!(
                "{}  {}  {}",
                theme.secondary_text(&number),
                theme.error_text(&format!("{:>12}", time)),
                theme.primary_text(text)
            ),
        },
        _ => println!(
            "{}  {}",
            theme.secondary_text(&number),
            theme.secondary_text("  (incomplete row)")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuejump::transcript::Columns;

    #[test]
    fn unparsable_skips_incomplete_rows() {
        let content = "Start Time,Text\n00:01,good\nabc,bad\n,missing\n";
        let transcript = Transcript::parse_csv(content, &Columns::default()).unwrap();

        let unparsable = unparsable_rows(&transcript);
        assert_eq!(unparsable.len(), 1);
        assert_eq!(unparsable[0].0, 1);
        assert!(matches!(unparsable[0].1, RowError::Format { .. }));
    }

    #[test]
    fn clean_transcript_has_no_findings() {
        let content = "Start Time,Text\n00:01,a\n01:02:03,b\n";
        let transcript = Transcript::parse_csv(content, &Columns::default()).unwrap();

        assert!(unparsable_rows(&transcript).is_empty());
        assert!(transcript.malformed().is_empty());
    }
}
