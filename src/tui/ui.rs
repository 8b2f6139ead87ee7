//! Layout and chrome rendering shared by the table view.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme::current_theme;

/// Split the frame into the table area, a status line, and a footer line.
pub fn build_main_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// A rect of the given percentage size, centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [middle] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(middle);
    rect
}

/// Render the status line. The app composes the mode-aware text itself.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str) {
    let theme = current_theme();
    frame.render_widget(
        Paragraph::new(text.to_string()).style(Style::default().fg(theme.text_secondary)),
        area,
    );
}

/// Render the centered key-hint footer.
pub fn render_footer_text(frame: &mut Frame, area: Rect, text: &str) {
    let theme = current_theme();
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(theme.text_secondary))
            .alignment(Alignment::Center),
        area,
    );
}
