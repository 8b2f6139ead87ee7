//! Playback launch results and method identifiers.

use crate::transcript::format_seconds;

/// The result of a playback launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchResult {
    /// The player ran and exited cleanly.
    Completed { tool: PlayerMethod, start_millis: u64 },
    /// The player ran but exited with a failure code.
    ExitedWithError { tool: PlayerMethod, code: Option<i32> },
}

impl LaunchResult {
    /// Create a Completed result.
    pub fn completed(tool: PlayerMethod, start_seconds: f64) -> Self {
        Self::Completed {
            tool,
            start_millis: (start_seconds.max(0.0) * 1000.0).round() as u64,
        }
    }

    /// Create an ExitedWithError result.
    pub fn exited_with_error(tool: PlayerMethod, code: Option<i32>) -> Self {
        Self::ExitedWithError { tool, code }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        match self {
            Self::Completed { tool, start_millis } => {
                format!(
                    "Played from {} with {}",
                    format_seconds(*start_millis as f64 / 1000.0),
                    tool.name()
                )
            }
            Self::ExitedWithError { tool, code } => match code {
                Some(code) => format!("{} exited with code {}", tool.name(), code),
                None => format!("{} was terminated by a signal", tool.name()),
            },
        }
    }

    /// Whether the player exited cleanly.
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Which tool was used for playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMethod {
    /// mpv media player
    Mpv,
    /// ffplay from the ffmpeg suite
    Ffplay,
    /// User-configured command template
    Custom,
}

impl PlayerMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mpv => "mpv",
            Self::Ffplay => "ffplay",
            Self::Custom => "custom command",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_message_names_tool_and_offset() {
        let result = LaunchResult::completed(PlayerMethod::Mpv, 123.0);
        assert_eq!(result.message(), "Played from 02:03 with mpv");
        assert!(result.is_clean());
    }

    #[test]
    fn completed_message_keeps_fractional_offsets() {
        let result = LaunchResult::completed(PlayerMethod::Ffplay, 5.5);
        assert_eq!(result.message(), "Played from 00:05.500 with ffplay");
    }

    #[test]
    fn error_message_includes_code() {
        let result = LaunchResult::exited_with_error(PlayerMethod::Ffplay, Some(1));
        assert_eq!(result.message(), "ffplay exited with code 1");
        assert!(!result.is_clean());
    }

    #[test]
    fn error_message_without_code_mentions_signal() {
        let result = LaunchResult::exited_with_error(PlayerMethod::Custom, None);
        assert!(result.message().contains("terminated by a signal"));
    }

    #[test]
    fn method_names() {
        assert_eq!(PlayerMethod::Mpv.name(), "mpv");
        assert_eq!(PlayerMethod::Ffplay.name(), "ffplay");
        assert_eq!(PlayerMethod::Custom.name(), "custom command");
    }
}
