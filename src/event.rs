//! Event handling module.
//!
//! This module reads terminal events with crossterm and maps key presses to
//! application actions. Reading happens on a blocking thread; mapping happens
//! on the UI task, which knows which input mode is active.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Scroll up one row
    ScrollUp,
    /// Scroll down one row
    ScrollDown,
    /// Scroll up one viewport
    PageUp,
    /// Scroll down one viewport
    PageDown,
    /// Click the numbered nav link (1-based)
    NavLink(usize),
    /// Click the back-to-top button
    BackToTop,
    /// Flip the theme switch
    ToggleThemeSwitch,
    /// Press the small theme icon
    ToggleThemeIcon,
    /// Next filter button
    NextFilter,
    /// Previous filter button
    PreviousFilter,
    /// Select the previous project card
    PreviousCard,
    /// Select the next project card
    NextCard,
    /// Open the selected project
    ViewProject,
    /// Open the selected project's code
    ViewCode,
    /// Focus the contact form
    EditContact,
    /// Focus the search box
    Search,
    /// Dismiss the newest notification
    Dismiss,
    /// Show help
    Help,
    /// Submit / follow (input modes)
    Enter,
    /// Leave the current input mode
    Back,
    /// Next form field
    NextField,
    /// Previous form field
    PreviousField,
    /// Character input (for text entry mode)
    Char(char),
    /// Backspace key (for text entry mode)
    Backspace,
}

/// Raw terminal input forwarded from the reader thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next terminal input.
    ///
    /// Returns Ok(None) if nothing relevant arrived within the timeout.
    pub fn next(&self) -> io::Result<Option<Input>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                // Only process key press events (not releases)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Some(Input::Key(key)))
                }
                Event::Resize(width, height) => return Ok(Some(Input::Resize(width, height))),
                _ => {}
            }
        }
        Ok(None)
    }

    /// Converts a key event to an input-mode action.
    pub fn key_to_input_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::BackTab => Some(Action::PreviousField),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }

    /// Converts a key event to a browsing action.
    pub fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Scrolling
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::BackToTop),
            KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|n| Action::NavLink(n as usize)),

            // Page controls
            KeyCode::Char('t') => Some(Action::ToggleThemeSwitch),
            KeyCode::Char('T') => Some(Action::ToggleThemeIcon),
            KeyCode::Char('f') => Some(Action::NextFilter),
            KeyCode::Char('F') => Some(Action::PreviousFilter),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousCard),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCard),
            KeyCode::Enter => Some(Action::ViewProject),
            KeyCode::Char('c') => Some(Action::ViewCode),
            KeyCode::Char('i') => Some(Action::EditContact),
            KeyCode::Char('/') => Some(Action::Search),
            KeyCode::Char('x') => Some(Action::Dismiss),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),
            KeyCode::Char('q') => Some(Action::Quit),

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_vim_scroll_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('j'))),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('k'))),
            Some(Action::ScrollUp)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('g'))),
            Some(Action::BackToTop)
        );
    }

    #[test]
    fn test_arrow_and_page_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Up)),
            Some(Action::ScrollUp)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Down)),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::PageDown)),
            Some(Action::PageDown)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::PageUp)),
            Some(Action::PageUp)
        );
    }

    #[test]
    fn test_nav_link_numbers() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('1'))),
            Some(Action::NavLink(1))
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('5'))),
            Some(Action::NavLink(5))
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('0'))),
            None
        );
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_page_control_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('t'))),
            Some(Action::ToggleThemeSwitch)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('T'))),
            Some(Action::ToggleThemeIcon)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('f'))),
            Some(Action::NextFilter)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('i'))),
            Some(Action::EditContact)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('/'))),
            Some(Action::Search)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('x'))),
            Some(Action::Dismiss)
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
    }

    #[test]
    fn test_input_mode_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Enter)),
            Some(Action::Enter)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Tab)),
            Some(Action::NextField)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::BackTab)),
            Some(Action::PreviousField)
        );
        // Keys that browse elsewhere are plain text here.
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Char('q'))
        );
    }

    #[test]
    fn test_input_mode_ctrl_c_quits() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }
}
