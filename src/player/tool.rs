//! PlayerTool trait and related error types.

use super::result::PlayerMethod;
use std::path::Path;
use std::process::ExitStatus;

/// One way of playing a video file from a given offset.
///
/// Implementations wrap a specific external player (mpv, ffplay, or a
/// user-configured command) and know its seek flags.
pub trait PlayerTool: Send + Sync {
    /// Which player this tool drives.
    fn method(&self) -> PlayerMethod;

    /// Name used in status messages and logs.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the player is installed. Must be cheap; the launcher calls
    /// this on every launch attempt.
    fn is_available(&self) -> bool;

    /// Launch the player at the given offset and wait for it to exit.
    ///
    /// `start_seconds` is never negative. Returns the player's exit status;
    /// a spawn failure is a `ToolError` so the caller can try the next tool.
    fn launch(&self, video: &Path, start_seconds: f64) -> Result<ExitStatus, ToolError>;
}

/// Why a single tool could not launch.
#[derive(Debug, Clone)]
pub enum ToolError {
    /// The player spawned but something went wrong running it
    Failed(String),
    /// The player binary is not installed
    NotFound,
}
