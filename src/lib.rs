//! cuejump - transcript/video sync for the terminal
//!
//! Load a talk transcript next to its recording, pick a row, and the
//! video opens at that row's start time. The library half carries the
//! transcript model, the seek session, the player launcher, and the TUI;
//! the binary wires them to the CLI.

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod session;
pub mod transcript;
pub mod tui;

pub use config::Config;
