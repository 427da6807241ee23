//! Page rendering.
//!
//! Every laid-out block becomes exactly as many lines as it has rows, so the
//! rendered page and the page geometry always agree. The page is then shown
//! through a scrolled paragraph.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::catalog::{Filter, ProjectCard};
use crate::constants::CELL_HEIGHT_PX;
use crate::contact::Field;
use crate::page::{parallax_offsets, Block, Placed, SectionId};

use super::colors::Palette;
use super::empty::empty_state_lines;

/// Background shapes: (page row, column as a percentage of the width, glyph).
const SHAPES: [(u32, u16, &str); 3] = [(2, 78, "◯"), (5, 88, "△"), (7, 68, "□")];

/// Draws the visible part of the page.
pub fn draw_page(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let renderer = PageRenderer {
        app,
        palette,
        width: area.width,
    };

    let mut lines = Vec::with_capacity(app.layout.total_rows() as usize);
    for placed in app.layout.blocks() {
        lines.extend(renderer.block_lines(placed));
    }

    if app.theme.is_dimmed() {
        for line in &mut lines {
            for span in &mut line.spans {
                span.style = span.style.fg(palette.dimmed);
            }
        }
    }

    let scroll = u16::try_from(app.scroll_rows).unwrap_or(u16::MAX);
    let page = Paragraph::new(lines)
        .style(Style::default().bg(palette.background))
        .scroll((scroll, 0));
    frame.render_widget(page, area);

    draw_shapes(frame, area, app, palette);
    if app.back_to_top_visible() {
        draw_back_to_top(frame, area, palette);
    }
}

/// Renders blocks into lines.
struct PageRenderer<'a> {
    app: &'a App,
    palette: &'a Palette,
    width: u16,
}

impl PageRenderer<'_> {
    fn block_lines(&self, placed: &Placed) -> Vec<Line<'static>> {
        let rows = usize::from(placed.rows);
        let hidden = [placed.element, placed.group]
            .into_iter()
            .flatten()
            .any(|element| self.app.reveal.is_hidden(element));

        let lines = if hidden {
            Vec::new()
        } else {
            match placed.block {
                Block::Spacer => Vec::new(),
                Block::Hero => self.hero(),
                Block::Profile => self.profile(),
                Block::About => self.about(),
                Block::SectionTitle(section) => self.section_title(section),
                Block::SkillCategoryHeader { category } => self.skill_category(category),
                Block::Skill { category, skill } => self.skill(category, skill),
                Block::FilterBar => self.filter_bar(),
                Block::ProjectCard { project_id } => self.project_card(project_id),
                Block::EmptyGrid => empty_state_lines(
                    self.width,
                    "No projects in this category",
                    "Press f to try another filter",
                    self.palette,
                ),
                Block::ContactInfo => self.contact_info(),
                Block::ContactForm => self.contact_form(),
                Block::Footer => self.footer(),
            }
        };
        fit_rows(lines, rows)
    }

    fn text(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    fn muted(&self) -> Style {
        Style::default().fg(self.palette.muted)
    }

    fn hero(&self) -> Vec<Line<'static>> {
        let typewriter = &self.app.typewriter;
        let cursor = if typewriter.cursor_visible() { "▌" } else { " " };
        vec![
            Line::from(""),
            Line::from(Span::styled("  Hello, I'm a developer.", self.muted())),
            Line::from(vec![
                Span::styled("  I build ", Style::default().fg(self.palette.text).bold()),
                Span::styled(
                    typewriter.text().to_string(),
                    Style::default().fg(self.palette.primary).bold(),
                ),
                Span::styled(cursor, Style::default().fg(self.palette.key)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Full-stack engineering, from the first sketch to production.",
                self.text(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  1-5", Style::default().fg(self.palette.key).bold()),
                Span::styled(" jump to a section   ", self.muted()),
                Span::styled("i", Style::default().fg(self.palette.key).bold()),
                Span::styled(" get in touch", self.muted()),
            ]),
        ]
    }

    fn profile(&self) -> Vec<Line<'static>> {
        let border = Style::default().fg(self.palette.border);
        vec![
            Line::from(Span::styled("  ╭────────────────────────────╮", border)),
            Line::from(vec![
                Span::styled("  │ ", border),
                Span::styled("◉ ", Style::default().fg(self.palette.success)),
                Span::styled("Available for work         ", self.text()),
                Span::styled("│", border),
            ]),
            Line::from(vec![
                Span::styled("  │ ", border),
                Span::styled("5+ years · 40+ projects    ", self.muted()),
                Span::styled(" │", border),
            ]),
            Line::from(Span::styled("  ╰────────────────────────────╯", border)),
        ]
    }

    fn about(&self) -> Vec<Line<'static>> {
        [
            "I design and build software for the web, mobile devices and the",
            "terminal. Most days that means TypeScript and Python; some days",
            "it means Go, SQL or a model that needs training.",
            "",
            "I care about fast interfaces, readable code and shipping.",
        ]
        .into_iter()
        .map(|text| Line::from(Span::styled(format!("  {text}"), self.text())))
        .collect()
    }

    fn section_title(&self, section: SectionId) -> Vec<Line<'static>> {
        let title = match section {
            SectionId::Home => "Home",
            SectionId::About => "About Me",
            SectionId::Skills => "Skills & Expertise",
            SectionId::Projects => "Featured Projects",
            SectionId::Contact => "Get In Touch",
        };
        vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ── ", Style::default().fg(self.palette.border)),
                Span::styled(title, Style::default().fg(self.palette.primary).bold()),
                Span::styled(" ──", Style::default().fg(self.palette.border)),
            ]),
        ]
    }

    fn skill_category(&self, category: usize) -> Vec<Line<'static>> {
        let Some(category) = self.app.skills.categories().get(category) else {
            return Vec::new();
        };
        vec![Line::from(vec![
            Span::styled(
                format!("  {} ", category.icon),
                Style::default().fg(self.palette.accent),
            ),
            Span::styled(category.name, Style::default().fg(self.palette.secondary).bold()),
        ])]
    }

    fn skill(&self, category: usize, skill: usize) -> Vec<Line<'static>> {
        let Some(entry) = self
            .app
            .skills
            .categories()
            .get(category)
            .and_then(|c| c.skills.get(skill))
        else {
            return Vec::new();
        };
        let fill = self.app.skills.fill_of(category, skill);
        let bar_width = usize::from(self.width).saturating_sub(14).min(48);

        vec![
            Line::from(vec![
                Span::styled(format!("    {:<30}", entry.name), self.text()),
                Span::styled(format!("{:>3}%", entry.level), self.muted()),
            ]),
            progress_bar(4, bar_width, fill, self.palette),
        ]
    }

    fn filter_bar(&self) -> Vec<Line<'static>> {
        let mut spans = vec![Span::raw("  ")];
        for button in Filter::BUTTONS {
            let style = if button == self.app.filter {
                Style::default()
                    .bg(self.palette.selection)
                    .fg(self.palette.selection_text)
                    .bold()
            } else {
                self.muted()
            };
            spans.push(Span::styled(format!(" {} ", button.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("  f/F", Style::default().fg(self.palette.key)));
        spans.push(Span::styled(" filter", self.muted()));
        vec![Line::from(spans)]
    }

    fn project_card(&self, project_id: u32) -> Vec<Line<'static>> {
        let Some(project) = self.app.catalog.get(project_id) else {
            return Vec::new();
        };
        let card = ProjectCard::from(project);
        let selected = self.app.selected_project_id() == Some(project_id);
        let border = Style::default().fg(if selected {
            self.palette.selection
        } else {
            self.palette.border
        });
        let inner = usize::from(self.width).saturating_sub(6).max(10);

        let row = |spans: Vec<Span<'static>>| {
            let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let mut line = vec![Span::styled("  │ ", border)];
            line.extend(spans);
            line.push(Span::raw(" ".repeat(inner.saturating_sub(used + 2))));
            line.push(Span::styled(" │", border));
            Line::from(line)
        };

        let stats = format!("★ {}  ⑂ {}", card.stars, card.forks);
        let badge = format!("{} {}", card.icon, card.badge);
        let gap = inner.saturating_sub(badge.chars().count() + stats.chars().count() + 2);
        let actions = if selected {
            vec![
                Span::styled("Enter", Style::default().fg(self.palette.key).bold()),
                Span::styled(" view project  ", self.muted()),
                Span::styled("c", Style::default().fg(self.palette.key).bold()),
                Span::styled(" view code", self.muted()),
            ]
        } else {
            Vec::new()
        };
        let bar_width = inner.saturating_sub(18).min(30);
        let mut progress = progress_bar(0, bar_width, card.progress, self.palette).spans;
        progress.push(Span::styled(format!(" {}", card.progress_label), self.muted()));

        vec![
            Line::from(Span::styled(format!("  ╭{}╮", "─".repeat(inner)), border)),
            row(vec![
                Span::styled(badge, Style::default().fg(self.palette.accent).bold()),
                Span::raw(" ".repeat(gap)),
                Span::styled(stats, self.muted()),
            ]),
            row(vec![Span::styled(
                truncate(&card.title, inner - 2),
                Style::default().fg(self.palette.primary).bold(),
            )]),
            row(vec![Span::styled(truncate(&card.description, inner - 2), self.text())]),
            row(vec![Span::styled(
                truncate(&card.tech.join(" · "), inner - 2),
                Style::default().fg(self.palette.secondary),
            )]),
            row(progress),
            row(actions),
            Line::from(Span::styled(format!("  ╰{}╯", "─".repeat(inner)), border)),
        ]
    }

    fn contact_info(&self) -> Vec<Line<'static>> {
        let icon = Style::default().fg(self.palette.accent);
        vec![
            Line::from(Span::styled(
                "  Have a project in mind? Drop a message.",
                self.text(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ✉ ", icon),
                Span::styled("hello@example.com", self.text()),
            ]),
            Line::from(vec![
                Span::styled("  ☏ ", icon),
                Span::styled("+1 (555) 010-0199", self.text()),
            ]),
            Line::from(vec![
                Span::styled("  ⌂ ", icon),
                Span::styled("Remote, worldwide", self.text()),
            ]),
        ]
    }

    fn contact_form(&self) -> Vec<Line<'static>> {
        let form = &self.app.contact;
        let editing = self.app.mode == Mode::Form;
        let mut lines = Vec::new();

        for field in Field::ALL {
            let focused = editing && form.focused() == field;
            let label_style = if focused {
                Style::default().fg(self.palette.primary).bold()
            } else {
                self.muted()
            };
            lines.push(Line::from(Span::styled(
                format!("  {}", field.label()),
                label_style,
            )));

            let mut value = vec![
                Span::styled("  › ", self.muted()),
                Span::styled(form.value(field).to_string(), self.text()),
            ];
            if focused {
                value.push(Span::styled(
                    "█",
                    Style::default()
                        .fg(self.palette.primary)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            lines.push(Line::from(value));
        }

        let button = if form.is_sending() {
            Style::default().fg(self.palette.muted)
        } else {
            Style::default()
                .bg(self.palette.selection)
                .fg(self.palette.selection_text)
                .bold()
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" ➤ {} ", form.submit_label()), button),
        ]));
        lines.push(Line::from(""));
        let hint = if editing {
            "  Tab next field · Enter send · Esc done"
        } else {
            "  Press i to write a message"
        };
        lines.push(Line::from(Span::styled(hint, self.muted())));
        lines
    }

    fn footer(&self) -> Vec<Line<'static>> {
        vec![Line::from(Span::styled(
            "  © Portfolio · made for the terminal",
            self.muted(),
        ))]
    }
}

/// Pads with blank lines or truncates to exactly `rows` lines.
fn fit_rows(mut lines: Vec<Line<'static>>, rows: usize) -> Vec<Line<'static>> {
    lines.truncate(rows);
    lines.resize_with(rows, || Line::from(""));
    lines
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn progress_bar(indent: usize, width: usize, percent: u8, palette: &Palette) -> Line<'static> {
    let filled = width * usize::from(percent.min(100)) / 100;
    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled("█".repeat(filled), Style::default().fg(palette.primary)),
        Span::styled("░".repeat(width - filled), Style::default().fg(palette.track)),
    ])
}

fn draw_shapes(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let scroll_y = i64::from(app.scroll_y());
    let offsets = parallax_offsets(app.scroll_y(), SHAPES.len());

    for ((row, column, glyph), offset) in SHAPES.iter().zip(offsets) {
        let base = i64::from(row * CELL_HEIGHT_PX);
        let screen_row = (base - scroll_y + offset).div_euclid(i64::from(CELL_HEIGHT_PX));
        let Ok(screen_row) = u16::try_from(screen_row) else {
            continue;
        };
        if screen_row >= area.height {
            continue;
        }
        let x = area.x + area.width.saturating_mul(*column) / 100;
        if x >= area.x + area.width {
            continue;
        }
        let rect = Rect::new(x, area.y + screen_row, 1, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(*glyph, Style::default().fg(palette.track))),
            rect,
        );
    }
}

fn draw_back_to_top(frame: &mut Frame, area: Rect, palette: &Palette) {
    const LABEL: &str = " ↑ top (g) ";
    let width = LABEL.chars().count() as u16;
    if area.width < width + 2 || area.height == 0 {
        return;
    }
    let rect = Rect::new(
        area.x + area.width - width - 2,
        area.y + area.height - 1,
        width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            LABEL,
            Style::default()
                .bg(palette.selection)
                .fg(palette.selection_text)
                .bold(),
        )),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::colors::DARK;

    #[test]
    fn test_fit_rows_pads_and_truncates() {
        let lines = vec![Line::from("a"), Line::from("b"), Line::from("c")];
        assert_eq!(fit_rows(lines.clone(), 2).len(), 2);
        assert_eq!(fit_rows(lines, 5).len(), 5);
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("much too long", 5), "much…");
    }

    #[test]
    fn test_progress_bar_width() {
        let line = progress_bar(2, 10, 50, &DARK);
        assert_eq!(line.spans[1].content.chars().count(), 5);
        assert_eq!(line.spans[2].content.chars().count(), 5);
    }
}
