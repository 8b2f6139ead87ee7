//! Transcript sync TUI application
//!
//! Interactive table of transcript rows. Activating a row hands its start
//! offset to the session, then the pending seek is consumed by launching
//! the video player from that offset. Search, reload, and a diagnostics
//! log round out the loop.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use super::theme::{current_theme, Theme};
use super::ui::{build_main_layout, centered_rect, render_footer_text, render_status_line};
use super::widgets::TranscriptTable;
use crate::player::Launcher;
use crate::session::SeekSession;
use crate::transcript::Transcript;

/// Diagnostics kept for display. Older entries are dropped first.
const MAX_DIAGNOSTICS: usize = 100;

/// UI mode for the sync application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Search mode - typing filters rows
    Search,
    /// Help mode - showing keyboard shortcuts
    Help,
    /// Diagnostics mode - showing the diagnostics log
    Diagnostics,
}

/// Sync application state
pub struct SyncApp {
    /// Base app for terminal handling
    app: App,
    /// The loaded transcript
    transcript: Transcript,
    /// Where the transcript was loaded from, for reloads
    transcript_path: PathBuf,
    /// The video to play
    video_path: PathBuf,
    /// Table over the transcript rows
    table: TranscriptTable,
    /// Seek state carried across activations
    session: SeekSession,
    /// Player launcher
    launcher: Launcher,
    /// Current UI mode
    mode: Mode,
    /// Live search input while in search mode
    search_input: String,
    /// One-shot status message shown instead of the row count
    status_message: Option<String>,
    /// Diagnostics log, oldest first
    diagnostics: Vec<String>,
    should_quit: bool,
}

impl SyncApp {
    /// Create the application around an already loaded transcript.
    #[cfg(not(tarpaulin_include))]
    pub fn new(
        transcript: Transcript,
        transcript_path: PathBuf,
        video_path: PathBuf,
        launcher: Launcher,
        tick_rate: Duration,
    ) -> Result<Self> {
        let app = App::new(tick_rate)?;
        let table = TranscriptTable::new(&transcript);

        Ok(Self {
            app,
            transcript,
            transcript_path,
            video_path,
            table,
            session: SeekSession::new(),
            launcher,
            mode: Mode::Normal,
            search_input: String::new(),
            status_message: None,
            diagnostics: Vec::new(),
            should_quit: false,
        })
    }

    /// Run the event loop until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.draw()?;
            if let Some(Event::Key(key)) = self.app.next_event()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key)?;
                }
            }
        }
        Ok(())
    }

    #[cfg(not(tarpaulin_include))]
    fn draw(&mut self) -> Result<()> {
        let (_, height) = self.app.size()?;
        self.table.set_page_size(height.saturating_sub(6) as usize);

        let status_text = compute_status_text(
            self.mode,
            self.status_message.as_deref(),
            &self.search_input,
            &self.table,
        );
        let footer_text = compute_footer_text(self.mode);
        let mode = self.mode;

        // Extract field borrows before the closure (avoids a borrow
        // conflict with self.app)
        let diagnostics = &self.diagnostics;
        let table = &mut self.table;

        self.app.draw(|frame| {
            let area = frame.area();
            let chunks = build_main_layout(area);

            table.render(frame, chunks[0]);
            render_status_line(frame, chunks[1], &status_text);
            render_footer_text(frame, chunks[2], footer_text);

            match mode {
                Mode::Help => Self::render_help_modal(frame, area),
                Mode::Diagnostics => Self::render_diagnostics_modal(frame, area, diagnostics),
                _ => {}
            }
        })?;

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match self.mode {
            Mode::Normal => self.handle_normal_key(key)?,
            Mode::Search => self.handle_search_key(key),
            // Any key closes help
            Mode::Help => self.mode = Mode::Normal,
            Mode::Diagnostics => self.handle_diagnostics_key(key),
        }
        Ok(())
    }

    /// Handle keys in normal mode.
    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Up | KeyCode::Char('k') => self.table.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(),
            KeyCode::PageUp => self.table.page_up(),
            KeyCode::PageDown => self.table.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.table.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.table.select_last(),

            KeyCode::Enter => self.activate_selected()?,
            KeyCode::Char('p') => self.replay_last()?,
            KeyCode::Char('r') => self.reload_transcript(),

            KeyCode::Char('/') => {
                self.status_message = None;
                self.search_input = self
                    .table
                    .search_filter()
                    .map(str::to_string)
                    .unwrap_or_default();
                self.mode = Mode::Search;
            }
            KeyCode::Char('d') => self.mode = Mode::Diagnostics,
            KeyCode::Char('?') => self.mode = Mode::Help,

            // Clear search filter and any stale status
            KeyCode::Esc => {
                self.search_input.clear();
                self.table.set_search(None);
                self.status_message = None;
            }

            _ => {}
        }
        Ok(())
    }

    /// Handle keys in search mode. The filter is applied live.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_input.clear();
                self.table.set_search(None);
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                self.search_input.pop();
                self.apply_search();
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.apply_search();
            }
            _ => {}
        }
    }

    /// Handle keys in diagnostics mode.
    fn handle_diagnostics_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('d')
        ) {
            self.mode = Mode::Normal;
        }
    }

    fn apply_search(&mut self) {
        let filter = if self.search_input.is_empty() {
            None
        } else {
            Some(self.search_input.clone())
        };
        self.table.set_search(filter);
    }

    /// Activate the selected row and play any resulting seek request.
    fn activate_selected(&mut self) -> Result<()> {
        let Some(source_index) = self.table.selected_source_index() else {
            return Ok(());
        };

        self.session.activate_row(&self.transcript, source_index);
        self.collect_diagnostics();

        if let Some(offset) = self.session.take_request() {
            self.play_from(offset)?;
        }
        Ok(())
    }

    /// Play again from the last stored offset.
    fn replay_last(&mut self) -> Result<()> {
        let offset = self.session.seek_seconds();
        self.play_from(offset)
    }

    /// Suspend the TUI, run the player, resume, and report the outcome.
    #[cfg(not(tarpaulin_include))]
    fn play_from(&mut self, offset: f64) -> Result<()> {
        self.app.suspend()?;
        let outcome = self.launcher.play(&self.video_path, offset);
        self.app.resume()?;

        match outcome {
            Ok(result) => self.status_message = Some(result.message()),
            Err(error) => self.status_message = Some(format!("Playback failed: {}", error)),
        }
        Ok(())
    }

    /// Reload the transcript file, keeping the search filter.
    fn reload_transcript(&mut self) {
        let columns = self.transcript.columns().clone();
        match Transcript::load(&self.transcript_path, &columns) {
            Ok(transcript) => {
                let search = self.table.search_filter().map(str::to_string);
                self.table = TranscriptTable::new(&transcript);
                self.table.set_search(search);
                self.status_message = Some(format!("Reloaded {} rows", transcript.len()));
                self.transcript = transcript;
            }
            Err(error) => {
                self.status_message = Some(format!("Reload failed: {}", error));
            }
        }
    }

    /// Move session diagnostics into the log and surface the newest one.
    fn collect_diagnostics(&mut self) {
        let mut drained: Vec<String> = self
            .session
            .drain_diagnostics()
            .into_iter()
            .map(|error| error.to_string())
            .collect();
        if drained.is_empty() {
            return;
        }

        self.status_message = drained.last().cloned();
        self.diagnostics.append(&mut drained);
        if self.diagnostics.len() > MAX_DIAGNOSTICS {
            let excess = self.diagnostics.len() - MAX_DIAGNOSTICS;
            self.diagnostics.drain(..excess);
        }
    }

    /// Render the help modal overlay.
    fn render_help_modal(frame: &mut Frame, area: Rect) {
        let theme = current_theme();

        // Center the modal
        let modal_width = 52.min(area.width.saturating_sub(4));
        let modal_height = 22.min(area.height.saturating_sub(4));
        let x = (area.width - modal_width) / 2;
        let y = (area.height - modal_height) / 2;
        let modal_area = Rect::new(x, y, modal_width, modal_height);

        // Clear the area behind the modal
        frame.render_widget(Clear, modal_area);

        let help_text = build_help_text(&theme);
        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(help, modal_area);
    }

    /// Render the diagnostics log overlay.
    fn render_diagnostics_modal(frame: &mut Frame, area: Rect, diagnostics: &[String]) {
        let theme = current_theme();
        let modal_area = centered_rect(70, 60, area);

        frame.render_widget(Clear, modal_area);

        let lines = build_diagnostics_lines(&theme, diagnostics);
        let modal = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Diagnostics "),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(modal, modal_area);
    }
}

// --- Pure text builders ---

/// Compute the status text for the given mode and state.
fn compute_status_text(
    mode: Mode,
    status_message: Option<&str>,
    search_input: &str,
    table: &TranscriptTable,
) -> String {
    if let Some(message) = status_message {
        return message.to_string();
    }
    match mode {
        Mode::Search => format!("Search: {}_", search_input),
        Mode::Help | Mode::Diagnostics => String::new(),
        Mode::Normal => format_normal_status(table),
    }
}

/// Format the status line for normal mode (row counts and active filter).
fn format_normal_status(table: &TranscriptTable) -> String {
    let mut parts = vec![];
    if let Some(search) = table.search_filter() {
        parts.push(format!("search: \"{}\"", search));
    }
    let malformed = table.malformed_count();
    if malformed > 0 {
        parts.push(format!("{} malformed", malformed));
    }

    let count = if table.search_filter().is_some() {
        format!("{} / {} rows", table.len(), table.total_len())
    } else {
        format!("{} rows", table.len())
    };

    if parts.is_empty() {
        count
    } else {
        format!("{} ({})", count, parts.join(", "))
    }
}

/// Get the footer text for the given mode.
fn compute_footer_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Search => "Esc: cancel | Enter: apply search | Backspace: delete char",
        Mode::Help => "Press any key to close help",
        Mode::Diagnostics => "Enter/Esc: dismiss",
        Mode::Normal => {
            "\u{2191}\u{2193}: navigate | Enter: play | p: replay | /: search | r: reload | d: diagnostics | ?: help | q: quit"
        }
    }
}

/// Build the help text lines for the help modal.
fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(vec![
            Span::styled("  \u{2191}/\u{2193} j/k", Style::default().fg(theme.accent)),
            Span::raw("   Navigate rows"),
        ]),
        Line::from(vec![
            Span::styled("  PgUp/Dn", Style::default().fg(theme.accent)),
            Span::raw("     Page up/down"),
        ]),
        Line::from(vec![
            Span::styled("  Home/End", Style::default().fg(theme.accent)),
            Span::raw("    First/last row (also g/G)"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Playback",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(vec![
            Span::styled("  Enter", Style::default().fg(theme.accent)),
            Span::raw("       Play video from this row"),
        ]),
        Line::from(vec![
            Span::styled("  p", Style::default().fg(theme.accent)),
            Span::raw("           Replay last position"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Transcript",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(vec![
            Span::styled("  /", Style::default().fg(theme.accent)),
            Span::raw("           Search rows"),
        ]),
        Line::from(vec![
            Span::styled("  r", Style::default().fg(theme.accent)),
            Span::raw("           Reload transcript file"),
        ]),
        Line::from(vec![
            Span::styled("  d", Style::default().fg(theme.accent)),
            Span::raw("           Diagnostics log"),
        ]),
        Line::from(vec![
            Span::styled("  Esc", Style::default().fg(theme.accent)),
            Span::raw("         Clear search"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ?", Style::default().fg(theme.accent)),
            Span::raw("           This help"),
        ]),
        Line::from(vec![
            Span::styled("  q", Style::default().fg(theme.accent)),
            Span::raw("           Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme.text_secondary),
        )),
    ]
}

/// Build the diagnostics modal lines, newest entry first.
fn build_diagnostics_lines(theme: &Theme, diagnostics: &[String]) -> Vec<Line<'static>> {
    if diagnostics.is_empty() {
        return vec![Line::from(Span::styled(
            "No diagnostics recorded.",
            Style::default().fg(theme.text_secondary),
        ))];
    }

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} diagnostics, most recent first", diagnostics.len()),
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(""),
    ];
    for message in diagnostics.iter().rev() {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.error),
        )));
    }
    lines
}
