//! Color palettes for the UI.
//!
//! One palette per theme; every widget takes its colors from the palette of
//! the current theme.

use ratatui::style::Color;

use crate::notify::Severity;
use crate::theme::Theme;

/// Colors used across the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary accent color (used for titles, highlights)
    pub primary: Color,
    /// Secondary accent color (used for active elements)
    pub secondary: Color,
    /// Background for selected items
    pub selection: Color,
    /// Text on selection
    pub selection_text: Color,
    /// Body text
    pub text: Color,
    /// Muted text color
    pub muted: Color,
    /// Text while the page opacity dips
    pub dimmed: Color,
    /// Error/danger color
    pub error: Color,
    /// Warning color
    pub warning: Color,
    /// Success color
    pub success: Color,
    /// Info color
    pub info: Color,
    /// Border color
    pub border: Color,
    /// Key highlight color (for keyboard shortcuts)
    pub key: Color,
    /// Accent color for icons and decorations
    pub accent: Color,
    /// Empty part of progress bars
    pub track: Color,
    /// Page background
    pub background: Color,
}

pub const DARK: Palette = Palette {
    primary: Color::Rgb(56, 189, 248),    // Bright cyan
    secondary: Color::Rgb(52, 211, 153),  // Bright emerald
    selection: Color::Rgb(99, 102, 241),  // Indigo
    selection_text: Color::White,
    text: Color::Rgb(226, 232, 240),
    muted: Color::Rgb(148, 163, 184),
    dimmed: Color::Rgb(71, 85, 105),
    error: Color::Rgb(251, 113, 133),     // Bright rose
    warning: Color::Rgb(251, 191, 36),    // Bright amber
    success: Color::Rgb(74, 222, 128),    // Bright green
    info: Color::Rgb(96, 165, 250),
    border: Color::Rgb(129, 140, 248),    // Light indigo
    key: Color::Rgb(244, 114, 182),       // Bright pink
    accent: Color::Rgb(192, 132, 252),    // Bright purple
    track: Color::Rgb(51, 65, 85),
    background: Color::Rgb(15, 23, 42),
};

pub const LIGHT: Palette = Palette {
    primary: Color::Rgb(2, 132, 199),
    secondary: Color::Rgb(5, 150, 105),
    selection: Color::Rgb(199, 210, 254),
    selection_text: Color::Rgb(30, 27, 75),
    text: Color::Rgb(15, 23, 42),
    muted: Color::Rgb(100, 116, 139),
    dimmed: Color::Rgb(203, 213, 225),
    error: Color::Rgb(225, 29, 72),
    warning: Color::Rgb(217, 119, 6),
    success: Color::Rgb(22, 163, 74),
    info: Color::Rgb(37, 99, 235),
    border: Color::Rgb(99, 102, 241),
    key: Color::Rgb(219, 39, 119),
    accent: Color::Rgb(147, 51, 234),
    track: Color::Rgb(226, 232, 240),
    background: Color::Rgb(248, 250, 252),
};

/// Palette for a theme.
pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

impl Palette {
    /// Accent color for a notification severity.
    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}
