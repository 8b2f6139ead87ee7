//! TUI (Text User Interface) module for cuejump
//!
//! This module provides the terminal interface using ratatui/crossterm:
//! the transcript table, the seek/playback loop, and theme plumbing.

pub mod app;
pub mod sync_app;
pub mod theme;
pub mod ui;
pub mod widgets;

// Re-export the app and shared types for commands and external use
pub use app::App;
pub use sync_app::SyncApp;
pub use theme::{current_theme, set_theme, Theme};
