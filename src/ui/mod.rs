//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! The page, the chrome around it and each overlay live in separate
//! submodules.

mod colors;
mod dialogs;
mod empty;
mod header;
mod help;
mod page;
mod status;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

use dialogs::{draw_loading, draw_notifications, draw_search_results};
use header::draw_header;
use help::draw_help_overlay;
use page::draw_page;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function: page, chrome, then overlays.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = colors::palette(app.theme.theme());

    // Create the main layout: header, page, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Page
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app, palette);
    draw_page(frame, chunks[1], app, palette);
    draw_commands_bar(frame, chunks[2], app, palette);
    draw_status_bar(frame, chunks[3], app, palette);

    draw_search_results(frame, chunks[1], app, palette);

    if app.show_help {
        draw_help_overlay(frame, palette);
    }

    // Notifications stay on top of everything but the loading screen.
    draw_notifications(frame, chunks[1], app, palette);

    // The loading screen covers everything until it is removed.
    draw_loading(frame, app, palette);
}
