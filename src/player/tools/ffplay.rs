//! ffplay player tool.

use crate::player::result::PlayerMethod;
use crate::player::tool::{PlayerTool, ToolError};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use super::{binary_exists, format_start_arg};

/// ffplay from the ffmpeg suite.
///
/// Seeks with `-ss <seconds>`. `-autoexit` makes it return when the video
/// ends instead of idling on the last frame.
pub struct Ffplay;

impl Ffplay {
    /// Create a new Ffplay tool.
    pub fn new() -> Self {
        Self
    }
}

impl PlayerTool for Ffplay {
    fn method(&self) -> PlayerMethod {
        PlayerMethod::Ffplay
    }

    fn is_available(&self) -> bool {
        binary_exists("ffplay")
    }

    fn launch(&self, video: &Path, start_seconds: f64) -> Result<ExitStatus, ToolError> {
        Command::new("ffplay")
            .args(["-loglevel", "error", "-autoexit", "-ss"])
            .arg(format_start_arg(start_seconds))
            .arg(video)
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ToolError::NotFound,
                _ => ToolError::Failed(e.to_string()),
            })
    }
}

impl Default for Ffplay {
    fn default() -> Self {
        Self::new()
    }
}
