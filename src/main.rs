//! foliotui
//!
//! A personal portfolio page that lives in the terminal.
//! Run with: foliotui [-s|--state-dir <DIR>] [-l|--log-level <LEVEL>]

mod app;
mod catalog;
mod config;
mod constants;
mod contact;
mod event;
mod loading;
mod logging;
mod nav;
mod notify;
mod page;
mod prefs;
mod reveal;
mod scheduler;
mod search;
mod skills;
mod theme;
mod typewriter;
mod ui;
mod validation;

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

use crate::app::{App, Mode};
use crate::catalog::Catalog;
use crate::config::{Command, Config};
use crate::constants::FRAME_INTERVAL;
use crate::event::{EventHandler, Input};
use crate::prefs::FileStore;

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    let command = match config::parse_args(env::args().skip(1), config::default_state_dir()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let config = match command {
        Command::Help => {
            println!("{}", config::USAGE);
            return Ok(());
        }
        Command::Run(config) => config,
    };

    // Keep the handle alive until exit so buffered records get flushed.
    let _logger = logging::init_logging(&config.log_level, &config.state_dir)?;

    let app = build_app(&config)?;

    // Initialize the terminal
    let terminal = ratatui::init();

    // Run the application
    let result = run_app(terminal, app).await;

    // Restore the terminal to its original state
    ratatui::restore();

    match &result {
        Ok(()) => info!("event=app_exit status=ok"),
        Err(e) => error!("event=app_exit status=error error={e:#}"),
    }
    result
}

fn build_app(config: &Config) -> Result<App> {
    let store = FileStore::open(&config.state_dir);
    info!("event=prefs_open path={}", store.path().display());

    let catalog = Catalog::bundled()?;
    App::new(Box::new(store), catalog, StdRng::from_entropy())
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Advance the page clock and draw on every frame tick
/// 2. Map terminal input to actions for the current mode
/// 3. Repeat until the user quits
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    app.resize(size.height);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let reader = tokio::task::spawn_blocking(move || read_input(tx));

    let event_handler = EventHandler::new();
    let started = Instant::now();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);

    loop {
        tokio::select! {
            _ = frames.tick() => {
                app.advance_to(started.elapsed());
                terminal
                    .draw(|frame| ui::draw(frame, &app))
                    .context("Failed to draw UI")?;
            }
            input = rx.recv() => {
                let Some(input) = input else {
                    // Reader stopped; surface its error if it had one.
                    return match reader.await {
                        Ok(result) => result.context("Failed to read terminal input"),
                        Err(e) => Err(e).context("Input reader panicked"),
                    };
                };
                let action = match input {
                    Input::Key(key) => match app.mode {
                        Mode::Browse => event_handler.key_to_action(key),
                        Mode::Form | Mode::Search => event_handler.key_to_input_action(key),
                    },
                    Input::Resize(_, height) => {
                        app.resize(height);
                        None
                    }
                };
                if let Some(action) = action {
                    // Process the action and check if we should quit
                    if app.handle_action(action)? {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Forwards terminal input until the receiver goes away.
fn read_input(tx: mpsc::UnboundedSender<Input>) -> std::io::Result<()> {
    let event_handler = EventHandler::new();
    loop {
        if let Some(input) = event_handler.next()? {
            if tx.send(input).is_err() {
                return Ok(());
            }
        } else if tx.is_closed() {
            return Ok(());
        }
    }
}
