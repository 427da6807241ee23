//! Header rendering: title, search box, theme controls and the nav bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::constants::layout;
use crate::nav::LINK_GAP;

use super::colors::Palette;

/// Left padding before the first nav link.
const NAV_INDENT: u16 = 2;

/// Draws the three header rows.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title, search, theme
            Constraint::Length(1), // Nav links
            Constraint::Length(1), // Active indicator
        ])
        .split(area);

    draw_title_row(frame, rows[0], app, palette);
    frame.render_widget(Paragraph::new(nav_links(app, palette)), rows[1]);
    frame.render_widget(Paragraph::new(indicator_line(app, palette)), rows[2]);
}

fn draw_title_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(12),
            Constraint::Length(layout::SEARCH_WIDTH),
            Constraint::Length(22),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled("  ◆ ", Style::default().fg(palette.accent)),
        Span::styled("folio", Style::default().fg(palette.primary).bold()),
        Span::styled("tui", Style::default().fg(palette.key).bold()),
    ]);
    frame.render_widget(Paragraph::new(title), columns[0]);
    frame.render_widget(Paragraph::new(search_line(app, palette)), columns[1]);
    frame.render_widget(Paragraph::new(theme_controls(app, palette)), columns[2]);
}

fn search_line<'a>(app: &'a App, palette: &Palette) -> Line<'a> {
    let focused = app.mode == Mode::Search;
    let border = if focused { palette.primary } else { palette.border };
    let input = app.search.input();

    let mut spans = vec![Span::styled("⌕ ", Style::default().fg(border))];
    if input.is_empty() && !focused {
        spans.push(Span::styled("Search... (/)", Style::default().fg(palette.muted)));
    } else {
        spans.push(Span::styled(input, Style::default().fg(palette.text)));
    }
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

fn theme_controls(app: &App, palette: &Palette) -> Line<'static> {
    let theme = app.theme.theme();
    let knob = if app.theme.switch_checked() {
        "(  ●)"
    } else {
        "(●  )"
    };

    Line::from(vec![
        Span::styled(theme.icon(), Style::default().fg(palette.warning)),
        Span::raw(" "),
        Span::styled(knob, Style::default().fg(palette.secondary)),
        Span::raw(" "),
        Span::styled(theme.label(), Style::default().fg(palette.muted)),
    ])
}

fn nav_links(app: &App, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(usize::from(NAV_INDENT)))];
    for (i, link) in app.nav.links().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(usize::from(LINK_GAP))));
        }
        let style = if app.nav.active() == Some(*link) {
            Style::default().fg(palette.primary).bold()
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(link.label(), style));
    }
    Line::from(spans)
}

fn indicator_line(app: &App, palette: &Palette) -> Line<'static> {
    let Some(indicator) = app.nav.indicator() else {
        return Line::from("");
    };
    Line::from(vec![
        Span::raw(" ".repeat(usize::from(NAV_INDENT + indicator.left))),
        Span::styled(
            "▔".repeat(usize::from(indicator.width)),
            Style::default().fg(palette.primary),
        ),
    ])
}
