//! User-configured player command.

use crate::player::result::PlayerMethod;
use crate::player::tool::{PlayerTool, ToolError};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use super::{binary_exists, format_start_arg};

/// A player built from a command template in the config.
///
/// The template is split on whitespace; `{video}` and `{start}` inside a
/// token are replaced with the video path and the offset in seconds.
/// Example: `vlc --start-time={start} {video}`.
pub struct CustomCommand {
    template: String,
}

impl CustomCommand {
    /// Create a tool from a command template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The program named by the template, if the template is non-empty.
    fn program(&self) -> Option<&str> {
        self.template.split_whitespace().next()
    }

    /// Expand the template into argv for the given video and offset.
    fn build_args(&self, video: &Path, start_seconds: f64) -> Vec<String> {
        let video_arg = video.to_string_lossy();
        let start_arg = format_start_arg(start_seconds);
        self.template
            .split_whitespace()
            .map(|token| {
                token
                    .replace("{video}", &video_arg)
                    .replace("{start}", &start_arg)
            })
            .collect()
    }
}

impl PlayerTool for CustomCommand {
    fn method(&self) -> PlayerMethod {
        PlayerMethod::Custom
    }

    fn is_available(&self) -> bool {
        self.program().is_some_and(binary_exists)
    }

    fn launch(&self, video: &Path, start_seconds: f64) -> Result<ExitStatus, ToolError> {
        let args = self.build_args(video, start_seconds);
        let (program, rest) = match args.split_first() {
            Some(split) => split,
            None => return Err(ToolError::NotFound),
        };

        Command::new(program)
            .args(rest)
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ToolError::NotFound,
                _ => ToolError::Failed(e.to_string()),
            })
    }
}
