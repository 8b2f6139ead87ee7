//! View command handler
//!
//! Loads the transcript, builds the player launcher, and runs the
//! interactive sync app.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};

use cuejump::player::{launcher_for, Backend};
use cuejump::transcript::Transcript;
use cuejump::tui::{set_theme, SyncApp, Theme};
use cuejump::Config;

#[cfg(not(tarpaulin_include))]
pub fn handle_view(
    transcript_path: PathBuf,
    video_path: PathBuf,
    start_column: Option<String>,
    text_column: Option<String>,
    player: Option<Backend>,
) -> Result<()> {
    let config = Config::load()?;
    set_theme(Theme::from_name(&config.ui.theme));

    // Fail before taking over the terminal, not on the first Enter
    if !video_path.exists() {
        bail!("Video file not found: {:?}", video_path);
    }
    if !atty::is(atty::Stream::Stdout) {
        bail!("The viewer needs an interactive terminal; try `cuejump check` instead");
    }

    let mut columns = config.columns();
    if let Some(name) = start_column {
        columns.start_time = name;
    }
    if let Some(name) = text_column {
        columns.text = name;
    }

    let transcript = Transcript::load(&transcript_path, &columns)?;
    tracing::info!(
        rows = transcript.len(),
        format = transcript.format().name(),
        "transcript loaded"
    );

    let backend = player.unwrap_or(config.player.backend);
    let launcher = launcher_for(backend, config.custom_command());

    let mut app = SyncApp::new(
        transcript,
        transcript_path,
        video_path,
        launcher,
        Duration::from_millis(config.ui.tick_rate_ms),
    )?;
    app.run()
}
