//! Timestamp parsing and formatting.
//!
//! Transcript start times come in as colon-separated text like `01:02:03`,
//! `02:03`, `03` or `00:00:05.5`. Parsing resolves them to a seconds offset
//! suitable for handing to a video player.

use super::RowError;

/// Parse a colon-separated timestamp into seconds.
///
/// The last segment is fractional seconds, the one before it is minutes,
/// the one before that is hours. Segments beyond hours are ignored, so
/// `"1:01:02:03"` resolves the same as `"01:02:03"`. A single segment is
/// plain seconds.
///
/// # Examples
///
/// ```
/// use cuejump::transcript::parse_timestamp;
///
/// assert_eq!(parse_timestamp("01:02:03").unwrap(), 3723.0);
/// assert_eq!(parse_timestamp("02:03").unwrap(), 123.0);
/// assert_eq!(parse_timestamp("00:00:05.5").unwrap(), 5.5);
/// assert!(parse_timestamp("abc").is_err());
/// ```
pub fn parse_timestamp(text: &str) -> Result<f64, RowError> {
    let segments: Vec<&str> = text.split(':').collect();

    let format_err = || RowError::Format {
        input: text.to_string(),
    };

    // Segments are indexed from the low-order end: seconds, minutes, hours.
    let seconds: f64 = segments
        .last()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(format_err)?;

    let mut total = seconds;

    if segments.len() >= 2 {
        let minutes: i64 = segments[segments.len() - 2]
            .trim()
            .parse()
            .map_err(|_| format_err())?;
        total += minutes as f64 * 60.0;
    }

    if segments.len() >= 3 {
        let hours: i64 = segments[segments.len() - 3]
            .trim()
            .parse()
            .map_err(|_| format_err())?;
        total += hours as f64 * 3600.0;
    }

    Ok(total)
}

/// Format a seconds offset back into canonical timestamp text.
///
/// Produces `MM:SS` below one hour and `HH:MM:SS` above, with a `.mmm`
/// millisecond suffix when the value is not whole. Re-parsing the output
/// of a successful parse yields the original value.
pub fn format_seconds(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let secs = (millis / 1000) % 60;
    let frac = millis % 1000;

    let secs_part = if frac == 0 {
        format!("{:02}", secs)
    } else {
        format!("{:02}.{:03}", secs, frac)
    };

    if hours > 0 {
        format!("{:02}:{:02}:{}", hours, minutes, secs_part)
    } else {
        format!("{:02}:{}", minutes, secs_part)
    }
}
