//! Video playback errors.

use std::path::PathBuf;

/// Errors that can occur when launching a video player.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Video file not found: {path:?}")]
    VideoNotFound { path: PathBuf },

    #[error("No video player available. Install mpv or ffplay, or set player.custom_command in the config.")]
    NoToolAvailable,

    #[error("Video player '{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },
}
