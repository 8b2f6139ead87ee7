//! Base terminal application handling
//!
//! Owns the ratatui terminal, raw mode, and the alternate screen. The
//! interactive app embeds an `App` and wraps external player processes in
//! `suspend`/`resume` so they get the real terminal.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

/// Base terminal application.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    suspended: bool,
}

impl App {
    /// Take over the terminal: raw mode plus the alternate screen.
    #[cfg(not(tarpaulin_include))]
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("Failed to initialize terminal")?;

        Ok(Self {
            terminal,
            tick_rate,
            suspended: false,
        })
    }

    /// Draw one frame with the given render closure.
    #[cfg(not(tarpaulin_include))]
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render).context("Failed to draw frame")?;
        Ok(())
    }

    /// Terminal size as (width, height).
    #[cfg(not(tarpaulin_include))]
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self
            .terminal
            .size()
            .context("Failed to read terminal size")?;
        Ok((size.width, size.height))
    }

    /// Wait up to one tick for the next input event.
    #[cfg(not(tarpaulin_include))]
    pub fn next_event(&self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate).context("Failed to poll for events")? {
            return Ok(Some(event::read().context("Failed to read event")?));
        }
        Ok(None)
    }

    /// Hand the terminal back to the shell before running a subprocess.
    #[cfg(not(tarpaulin_include))]
    pub fn suspend(&mut self) -> Result<()> {
        if self.suspended {
            return Ok(());
        }
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        self.suspended = true;
        Ok(())
    }

    /// Take the terminal back after a subprocess finished.
    #[cfg(not(tarpaulin_include))]
    pub fn resume(&mut self) -> Result<()> {
        if !self.suspended {
            return Ok(());
        }
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)
            .context("Failed to re-enter alternate screen")?;
        self.terminal.clear().context("Failed to clear terminal")?;
        self.suspended = false;
        Ok(())
    }
}

impl Drop for App {
    /// Best-effort terminal restore. Errors are ignored since there is
    /// nowhere left to report them.
    fn drop(&mut self) {
        if !self.suspended {
            let _ = disable_raw_mode();
            let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
            let _ = self.terminal.show_cursor();
        }
    }
}
