//! Command handlers for the CLI subcommands

pub mod check;
pub mod config;
pub mod view;
