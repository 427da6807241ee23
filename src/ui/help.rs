//! Help overlay rendering.

use ratatui::{
    style::{Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors::Palette;
use super::utils::centered_rect;

/// Key column width.
const KEY_WIDTH: usize = 12;

/// (section, [(keys, description)])
const HELP: [(&str, &[(&str, &str)]); 4] = [
    (
        "SCROLLING",
        &[
            ("j / Down", "Scroll down one row"),
            ("k / Up", "Scroll up one row"),
            ("PgDn / PgUp", "Scroll one page"),
            ("1 - 5", "Jump to Home, About, Skills, Projects, Contact"),
            ("g / Home", "Back to top (once scrolled down)"),
        ],
    ),
    (
        "PROJECTS",
        &[
            ("f / F", "Next / previous category filter"),
            ("Left/Right", "Select a project card"),
            ("Enter", "View the selected project"),
            ("c", "View the selected project's code"),
        ],
    ),
    (
        "PAGE",
        &[
            ("i", "Write a message (Tab moves, Enter sends)"),
            ("/", "Search (Enter follows the first result)"),
            ("t", "Flip the theme switch"),
            ("T", "Theme icon button"),
            ("x", "Dismiss the newest notification"),
        ],
    ),
    (
        "GENERAL",
        &[
            ("? / F1", "Show this help"),
            ("q / Ctrl+C", "Quit application"),
        ],
    ),
];

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(help_text(palette))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.primary))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" Help ", Style::default().fg(palette.text).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(palette.muted),
                    ),
                ]))
                .style(Style::default().bg(palette.background)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// Returns the help text content.
fn help_text(palette: &Palette) -> Text<'static> {
    let key_style = Style::default().fg(palette.key).bold();
    let desc_style = Style::default().fg(palette.text);
    let section_style = Style::default().fg(palette.primary).bold();

    let mut lines = vec![Line::from("")];
    for (section, entries) in HELP {
        lines.push(Line::from(Span::styled(format!("  ▸ {section}"), section_style)));
        lines.push(Line::from(""));
        for (keys, description) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("    {keys:<KEY_WIDTH$}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    Text::from(lines)
}
