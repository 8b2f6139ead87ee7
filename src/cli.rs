//! Command line interface definitions
//!
//! Lives in the library so the man page generator in xtask can reuse the
//! command model.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::player::Backend;

/// Version string for `--version`. Dev builds carry the git SHA.
fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!(
            "{} ({} {})",
            env!("CARGO_PKG_VERSION"),
            sha,
            env!("CUEJUMP_BUILD_DATE")
        ),
        None => format!(
            "{} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("CUEJUMP_BUILD_DATE")
        ),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "cuejump",
    author,
    version = version_string(),
    about = "Jump a video player to the transcript row you pick",
    long_about = None,
    after_help = concat!("Project: https://github.com/", env!("CUEJUMP_REPO_NAME")),
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the transcript viewer for a video
    View {
        /// Transcript file (.csv or .json)
        transcript: PathBuf,
        /// Video file to play
        video: PathBuf,
        /// Column holding the start timestamps (overrides config)
        #[arg(long)]
        start_column: Option<String>,
        /// Column holding the row text (overrides config)
        #[arg(long)]
        text_column: Option<String>,
        /// Player backend to use (overrides config)
        #[arg(long, value_enum)]
        player: Option<Backend>,
    },

    /// Check a transcript file and report rows that cannot seek
    Check {
        /// Transcript file (.csv or .json)
        transcript: PathBuf,
        /// Exit non-zero when any row has problems
        #[arg(long)]
        strict: bool,
        /// List every row with its parsed offset
        #[arg(long, short)]
        verbose: bool,
        /// Column holding the start timestamps (overrides config)
        #[arg(long)]
        start_column: Option<String>,
        /// Column holding the row text (overrides config)
        #[arg(long)]
        text_column: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Open config file in $EDITOR
    Edit,
    /// Add missing fields to the config file
    Migrate {
        /// Apply changes without prompting
        #[arg(long, short)]
        yes: bool,
    },
}
