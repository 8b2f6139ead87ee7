//! External video player integration
//!
//! Plays the session's video through whatever player the machine has,
//! positioned at the requested seek offset:
//!
//! - `tools/`: one wrapper per supported player (mpv, ffplay, custom command)
//! - `launch`: the orchestrator that tries tools in priority order
//! - `result`/`error`: what a launch reports back to the UI
//!
//! # Usage
//!
//! ```no_run
//! use cuejump::player::{launcher_for, Backend};
//! use std::path::Path;
//!
//! let launcher = launcher_for(Backend::Auto, None);
//! let result = launcher.play(Path::new("talk.mp4"), 123.0).unwrap();
//! println!("{}", result.message());
//! ```

mod error;
mod launch;
mod result;
mod tool;
mod tools;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use error::PlayerError;
pub use launch::Launcher;
pub use result::{LaunchResult, PlayerMethod};
pub use tool::{PlayerTool, ToolError};
pub use tools::{CustomCommand, Ffplay, Mpv};

/// Which playback backend to use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Try the custom command (when configured), then mpv, then ffplay.
    #[default]
    Auto,
    /// mpv only.
    Mpv,
    /// ffplay only.
    Ffplay,
    /// The configured custom command only.
    Custom,
}

/// Build a launcher for the given backend.
///
/// `Auto` assembles the full priority list; the other variants pin a single
/// tool, so a broken preference surfaces instead of silently switching
/// players.
pub fn launcher_for(backend: Backend, custom_command: Option<&str>) -> Launcher {
    match backend {
        Backend::Auto => Launcher::new(custom_command),
        Backend::Mpv => Launcher::with_tools(vec![Box::new(Mpv::new())]),
        Backend::Ffplay => Launcher::with_tools(vec![Box::new(Ffplay::new())]),
        Backend::Custom => Launcher::with_tools(vec![Box::new(CustomCommand::new(
            custom_command.unwrap_or_default(),
        ))]),
    }
}
