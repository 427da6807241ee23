//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Mode};

use super::colors::Palette;

/// Draws the commands bar showing available keys for the current mode.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let commands = commands_for_mode(app.mode);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(palette.border)));
        }
        spans.push(Span::styled(*key, Style::default().fg(palette.key).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(palette.muted)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the keys available in a mode.
fn commands_for_mode(mode: Mode) -> Vec<(&'static str, &'static str)> {
    match mode {
        Mode::Browse => vec![
            ("j/k", "scroll"),
            ("1-5", "sections"),
            ("f", "filter"),
            ("←/→", "card"),
            ("i", "contact"),
            ("/", "search"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Mode::Form => vec![
            ("Tab", "next field"),
            ("Shift+Tab", "previous"),
            ("Enter", "send"),
            ("Esc", "done"),
        ],
        Mode::Search => vec![("Enter", "go to first result"), ("Esc", "close")],
    }
}

/// Draws the status bar at the bottom: where on the page the reader is.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let section = app
        .nav
        .active()
        .map(|s| s.label())
        .unwrap_or("-");
    let max = app.max_scroll_rows().max(1);
    let percent = app.scroll_rows.min(max) * 100 / max;

    let line = Line::from(vec![
        Span::styled(" ◈ ", Style::default().fg(palette.success)),
        Span::styled(section, Style::default().fg(palette.primary).bold()),
        Span::styled(format!("  {percent:>3}%"), Style::default().fg(palette.muted)),
        Span::styled("  │  ", Style::default().fg(palette.border)),
        Span::styled(
            format!("filter: {}", app.filter.label()),
            Style::default().fg(palette.muted),
        ),
        Span::styled("  │  ", Style::default().fg(palette.border)),
        Span::styled(app.theme.theme().label(), Style::default().fg(palette.muted)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
