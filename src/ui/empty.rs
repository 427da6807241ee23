//! Empty state rendering.

use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

use super::colors::Palette;

/// Lines for an empty state with icon, title and description, centered in
/// `width` cells.
pub fn empty_state_lines(
    width: u16,
    title: &str,
    description: &str,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let center = |text: &str, style: Style| {
        let pad = usize::from(width).saturating_sub(text.chars().count()) / 2;
        Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(text.to_string(), style),
        ])
    };

    vec![
        Line::from(""),
        center("∅", Style::default().fg(palette.accent)),
        center(title, Style::default().fg(palette.primary).bold()),
        center(description, Style::default().fg(palette.muted)),
        Line::from(""),
    ]
}
