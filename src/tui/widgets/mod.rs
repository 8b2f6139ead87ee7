//! TUI widgets for cuejump
//!
//! Reusable UI components for the terminal interface.

pub mod transcript_table;

pub use transcript_table::{RowItem, TranscriptTable};
