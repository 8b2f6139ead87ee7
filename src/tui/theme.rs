//! Color themes for the table view and CLI output.
//!
//! A theme carries the handful of colors the interface uses and turns
//! them into ratatui styles or ANSI-wrapped strings. The active theme is
//! installed once at startup from the `ui.theme` config value.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

/// The colors one theme is built from.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main content text
    pub text_primary: Color,
    /// Dimmed text: status line, footer, incomplete rows
    pub text_secondary: Color,
    /// Highlights: timestamps, borders, keybindings
    pub accent: Color,
    /// Problems: bad timestamps, diagnostics
    pub error: Color,
    /// Confirmation messages
    pub success: Color,
    /// Background (left at the terminal default)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Default look: gray text with a green accent, rendered through the
    /// terminal's own standard colors.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// High-contrast white text with a yellow accent.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Cyan-tinted variant.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Resolve a theme from its config name. Unknown names mean the
    /// standard theme.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "classic" => Self::classic(),
            "ocean" => Self::ocean(),
            _ => Self::standard(),
        }
    }

    // ratatui styles

    pub fn text_style(&self) -> Style {
        fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        fg(self.accent)
    }

    /// Bold accent, used for table headers.
    pub fn accent_bold_style(&self) -> Style {
        fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Selected-row style: inverted bold accent.
    pub fn highlight_style(&self) -> Style {
        fg(self.accent).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn error_style(&self) -> Style {
        fg(self.error)
    }

    // ANSI strings for plain CLI output

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

fn fg(color: Color) -> Style {
    Style::new().fg(color)
}

/// Wrap `text` in the ANSI sequence for `color`, resetting afterwards.
/// Honors the `NO_COLOR` convention: any non-empty value disables color.
fn paint(color: Color, text: &str) -> String {
    static NO_COLOR: OnceLock<bool> = OnceLock::new();
    let disabled =
        *NO_COLOR.get_or_init(|| std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()));
    paint_with(color, text, disabled)
}

fn paint_with(color: Color, text: &str, no_color: bool) -> String {
    if no_color {
        return text.to_string();
    }
    format!("{}{}\x1b[0m", ansi_code(color), text)
}

/// ANSI code for the colors the built-in themes use.
fn ansi_code(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        // Anything a future palette might add renders uncolored
        _ => "",
    }
}

static ACTIVE_THEME: OnceLock<Theme> = OnceLock::new();

/// Install the configured theme. The first call wins; later calls are
/// ignored.
pub fn set_theme(theme: Theme) {
    let _ = ACTIVE_THEME.set(theme);
}

/// The installed theme, or the standard one before installation.
pub fn current_theme() -> Theme {
    ACTIVE_THEME.get().cloned().unwrap_or_default()
}
