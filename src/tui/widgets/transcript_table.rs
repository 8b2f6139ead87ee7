//! Transcript table widget
//!
//! Scrollable table of transcript rows with search filtering. Rows that
//! cannot drive a seek are dimmed; a timestamp that fails to parse is
//! shown in the error color since activating it falls back to zero.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::transcript::{parse_timestamp, Transcript};
use crate::tui::theme::current_theme;

/// One displayable transcript row.
#[derive(Debug, Clone)]
pub struct RowItem {
    /// Position of the row in the loaded transcript
    pub source_index: usize,
    /// Raw start time cell, as loaded
    pub time: String,
    /// Parsed offset in seconds, when the time cell parses
    pub seconds: Option<f64>,
    /// Raw text cell
    pub text: String,
    /// Whether both fields were present in the source
    pub complete: bool,
}

/// Table state: all rows, the active search filter, and the selection.
///
/// The selection tracks a position in the filtered view; callers map it
/// back to the transcript with [`selected_source_index`].
///
/// [`selected_source_index`]: TranscriptTable::selected_source_index
pub struct TranscriptTable {
    items: Vec<RowItem>,
    /// Source indices currently visible, in transcript order
    visible: Vec<usize>,
    state: TableState,
    search: Option<String>,
    page_size: usize,
    time_header: String,
    text_header: String,
}

impl TranscriptTable {
    /// Build the table state from a loaded transcript.
    pub fn new(transcript: &Transcript) -> Self {
        let items: Vec<RowItem> = transcript
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| RowItem {
                source_index: index,
                time: row.start_time.clone().unwrap_or_default(),
                seconds: row
                    .start_time
                    .as_deref()
                    .and_then(|text| parse_timestamp(text).ok()),
                text: row.text.clone().unwrap_or_default(),
                complete: row.is_complete(),
            })
            .collect();

        let visible: Vec<usize> = (0..items.len()).collect();
        let mut state = TableState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }

        Self {
            items,
            visible,
            state,
            search: None,
            page_size: 10,
            time_header: transcript.columns().start_time.clone(),
            text_header: transcript.columns().text.clone(),
        }
    }

    /// Number of rows currently visible (after filtering).
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Total number of rows in the transcript.
    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    /// Rows that are missing a field and therefore cannot seek.
    pub fn malformed_count(&self) -> usize {
        self.items.iter().filter(|item| !item.complete).count()
    }

    /// Rows the next page jump moves over. Derived from the visible
    /// height by the caller on each draw.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
    }

    pub fn search_filter(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Apply a case-insensitive substring filter over the text and time
    /// columns. `None` or an empty string clears the filter. The selected
    /// row is kept when it survives the filter.
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search.filter(|s| !s.is_empty());
        let previous = self.selected_source_index();

        self.visible = match &self.search {
            Some(needle) => {
                let needle = needle.to_lowercase();
                self.items
                    .iter()
                    .filter(|item| {
                        item.text.to_lowercase().contains(&needle)
                            || item.time.to_lowercase().contains(&needle)
                    })
                    .map(|item| item.source_index)
                    .collect()
            }
            None => (0..self.items.len()).collect(),
        };

        let position =
            previous.and_then(|source| self.visible.iter().position(|&index| index == source));
        self.state.select(if self.visible.is_empty() {
            None
        } else {
            Some(position.unwrap_or(0))
        });
    }

    /// The currently selected row, if any.
    pub fn selected_item(&self) -> Option<&RowItem> {
        let position = self.state.selected()?;
        let source = *self.visible.get(position)?;
        self.items.get(source)
    }

    /// Source index of the selected row in the loaded transcript.
    pub fn selected_source_index(&self) -> Option<usize> {
        self.selected_item().map(|item| item.source_index)
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn page_down(&mut self) {
        self.move_selection(self.page_size as isize);
    }

    pub fn page_up(&mut self) {
        self.move_selection(-(self.page_size as isize));
    }

    pub fn select_first(&mut self) {
        if !self.visible.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.state.select(Some(self.visible.len() - 1));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.visible.is_empty() {
            self.state.select(None);
            return;
        }
        let current = self.state.selected().unwrap_or(0) as isize;
        let last = (self.visible.len() - 1) as isize;
        let next = (current + delta).clamp(0, last);
        self.state.select(Some(next as usize));
    }

    /// Render the table into `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = current_theme();

        let index_width = (digits(self.items.len()) as u16).max(2);
        let time_width = self
            .visible
            .iter()
            .map(|&index| UnicodeWidthStr::width(self.items[index].time.as_str()))
            .chain(std::iter::once(UnicodeWidthStr::width(
                self.time_header.as_str(),
            )))
            .max()
            .unwrap_or(8)
            .clamp(5, 16) as u16;

        // Borders, two column gaps, and the highlight symbol eat into the
        // text column.
        let text_budget = area
            .width
            .saturating_sub(index_width + time_width + 8)
            .max(4) as usize;

        let header = Row::new(vec![
            Cell::from("#"),
            Cell::from(self.time_header.clone()),
            Cell::from(self.text_header.clone()),
        ])
        .style(theme.accent_bold_style());

        let rows: Vec<Row> = self
            .visible
            .iter()
            .map(|&index| {
                let item = &self.items[index];
                let time_style = if !item.complete {
                    theme.text_secondary_style()
                } else if item.seconds.is_none() {
                    theme.error_style()
                } else {
                    theme.accent_style()
                };
                let text_style = if item.complete {
                    theme.text_style()
                } else {
                    theme.text_secondary_style()
                };
                let time = if item.time.is_empty() {
                    "--".to_string()
                } else {
                    truncate_to_width(&item.time, time_width as usize)
                };

                Row::new(vec![
                    Cell::from((item.source_index + 1).to_string())
                        .style(theme.text_secondary_style()),
                    Cell::from(time).style(time_style),
                    Cell::from(truncate_to_width(&item.text, text_budget)).style(text_style),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(index_width),
                Constraint::Length(time_width),
                Constraint::Min(4),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style())
                .title(" Transcript "),
        )
        .row_highlight_style(theme.highlight_style())
        .highlight_symbol("> ");

        frame.render_stateful_widget(table, area, &mut self.state);
    }
}

/// Decimal digits needed for a row count.
fn digits(count: usize) -> usize {
    count.max(1).ilog10() as usize + 1
}

/// Truncate `text` to at most `max` display columns, appending an
/// ellipsis when anything was cut.
fn truncate_to_width(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let width = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        result.push(c);
    }
    result.push('\u{2026}');
    result
}
