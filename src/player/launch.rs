//! Launch orchestrator for video playback.

use super::error::PlayerError;
use super::result::LaunchResult;
use super::tool::{PlayerTool, ToolError};
use super::tools::default_tools;
use std::path::Path;

/// Orchestrates playback launches using available tools.
///
/// Tools are tried in priority order; the first one that actually spawns
/// wins. A tool that is missing or fails to spawn is skipped, so one broken
/// install does not take the whole feature down.
pub struct Launcher {
    tools: Vec<Box<dyn PlayerTool>>,
}

impl Launcher {
    /// Create with the default tool priority, custom command first when set.
    pub fn new(custom_command: Option<&str>) -> Self {
        Self {
            tools: default_tools(custom_command),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn PlayerTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn PlayerTool>] {
        &self.tools
    }

    /// Play a video from the given offset, blocking until the player exits.
    pub fn play(&self, video: &Path, start_seconds: f64) -> Result<LaunchResult, PlayerError> {
        if !video.exists() {
            return Err(PlayerError::VideoNotFound {
                path: video.to_path_buf(),
            });
        }

        // The session clamps already; launching directly must not pass a
        // negative offset to a player either.
        let start_seconds = start_seconds.max(0.0);

        let mut last_failure: Option<(&'static str, String)> = None;

        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }

            tracing::debug!(tool = tool.name(), start_seconds, "launching video player");
            match tool.launch(video, start_seconds) {
                Ok(status) if status.success() => {
                    return Ok(LaunchResult::completed(tool.method(), start_seconds));
                }
                Ok(status) => {
                    // The player ran; trying another tool would replay the
                    // video, so report the exit as-is.
                    return Ok(LaunchResult::exited_with_error(tool.method(), status.code()));
                }
                Err(ToolError::NotFound) => continue,
                Err(ToolError::Failed(message)) => {
                    tracing::warn!(tool = tool.name(), "player failed to spawn: {}", message);
                    last_failure = Some((tool.name(), message));
                    continue;
                }
            }
        }

        match last_failure {
            Some((tool, message)) => Err(PlayerError::ToolFailed { tool, message }),
            None => Err(PlayerError::NoToolAvailable),
        }
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(None)
    }
}
