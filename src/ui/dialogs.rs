//! Overlay rendering (notifications, search results, loading screen).

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::{dialog, layout};
use crate::loading::LoadingScreen;
use crate::notify::Phase;
use crate::search::Results;

use super::colors::Palette;
use super::utils::{centered_rect, top_right_rect};

/// Text shown while nothing matches.
pub(crate) const NO_RESULTS: &str = "No results found";

/// Draws notifications stacked in the top-right corner, newest at the bottom.
pub fn draw_notifications(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    for (i, notification) in app.notifier.active().iter().enumerate() {
        let offset = i as u16 * layout::NOTIFICATION_HEIGHT;
        let rect = top_right_rect(
            layout::NOTIFICATION_WIDTH,
            layout::NOTIFICATION_HEIGHT,
            offset,
            area,
        );
        if rect.height == 0 {
            break;
        }

        let accent = palette.severity(notification.severity);
        let mut border = Style::default().fg(accent);
        let mut text = Style::default().fg(palette.text);
        match notification.phase {
            Phase::Entering | Phase::Leaving => {
                border = border.add_modifier(Modifier::DIM);
                text = text.add_modifier(Modifier::DIM);
            }
            Phase::Shown => {}
        }

        frame.render_widget(Clear, rect);
        let widget = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", notification.severity.glyph()), border.bold()),
            Span::styled(notification.message.as_str(), text),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(symbols::border::ROUNDED)
                .border_style(border)
                .title(Span::styled(" x ", Style::default().fg(palette.muted)))
                .title_alignment(Alignment::Right)
                .style(Style::default().bg(palette.background)),
        )
        .wrap(Wrap { trim: true });
        frame.render_widget(widget, rect);
    }
}

/// Draws the search results dropdown under the header.
pub fn draw_search_results(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if !app.search.is_open() {
        return;
    }

    let lines: Vec<Line> = match app.search.results() {
        Results::Empty => return,
        Results::NoResults => vec![Line::from(Span::styled(
            NO_RESULTS,
            Style::default().fg(palette.muted),
        ))],
        Results::Matches(items) => items
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<8}", item.kind.as_str()),
                        Style::default().fg(palette.accent),
                    ),
                    Span::styled(item.title, Style::default().fg(palette.text).bold()),
                    Span::styled(
                        format!("  {}", item.category),
                        Style::default().fg(palette.muted),
                    ),
                ])
            })
            .collect(),
    };

    let width = layout::SEARCH_WIDTH.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let x = area.x + area.width.saturating_sub(width + 22);
    let rect = Rect::new(x, area.y, width, height);

    frame.render_widget(Clear, rect);
    let dropdown = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::default().fg(palette.primary))
            .style(Style::default().bg(palette.background)),
    );
    frame.render_widget(dropdown, rect);
}

/// Draws the loading screen while it is still attached.
pub fn draw_loading(frame: &mut Frame, app: &App, palette: &Palette) {
    let fading = match app.loading {
        LoadingScreen::Removed => return,
        LoadingScreen::Visible => false,
        LoadingScreen::Fading => true,
    };

    // Cover everything, then the card in the middle.
    let full = frame.area();
    frame.render_widget(Clear, full);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        full,
    );

    let area = centered_rect(dialog::LOADING_WIDTH, dialog::LOADING_HEIGHT, full);
    let mut style = Style::default().fg(palette.primary);
    if fading {
        style = style.add_modifier(Modifier::DIM);
    }

    let content = vec![
        Line::from(""),
        Line::from(Span::styled("◆ foliotui", style.bold())),
        Line::from(""),
        Line::from(Span::styled(
            if fading { "Ready" } else { "Loading..." },
            Style::default().fg(palette.muted),
        )),
    ];
    let loading = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(symbols::border::DOUBLE)
                .border_style(style),
        );
    frame.render_widget(loading, area);
}
