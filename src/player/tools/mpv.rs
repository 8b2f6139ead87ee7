//! mpv player tool.

use crate::player::result::PlayerMethod;
use crate::player::tool::{PlayerTool, ToolError};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use super::{binary_exists, format_start_arg};

/// mpv media player.
///
/// Seeks with `--start=<seconds>` and exits when playback ends.
pub struct Mpv;

impl Mpv {
    /// Create a new Mpv tool.
    pub fn new() -> Self {
        Self
    }
}

impl PlayerTool for Mpv {
    fn method(&self) -> PlayerMethod {
        PlayerMethod::Mpv
    }

    fn is_available(&self) -> bool {
        binary_exists("mpv")
    }

    fn launch(&self, video: &Path, start_seconds: f64) -> Result<ExitStatus, ToolError> {
        Command::new("mpv")
            .arg("--really-quiet")
            .arg(format!("--start={}", format_start_arg(start_seconds)))
            .arg(video)
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ToolError::NotFound,
                _ => ToolError::Failed(e.to_string()),
            })
    }
}

impl Default for Mpv {
    fn default() -> Self {
        Self::new()
    }
}
