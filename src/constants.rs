//! Application-wide constants.
//!
//! Centralizes timings, page geometry and layout values.

use std::time::Duration;

/// Event polling timeout for the input reader thread.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Redraw / clock advance interval.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Height of one terminal row in page pixels.
pub const CELL_HEIGHT_PX: u32 = 16;

/// Timings for the animated parts of the page.
pub mod timing {
    use std::time::Duration;

    /// Delay before the typewriter types its first character.
    pub const TYPEWRITER_START: Duration = Duration::from_millis(1000);
    /// Base delay between typed characters.
    pub const TYPE_DELAY: Duration = Duration::from_millis(100);
    /// Base delay between deleted characters.
    pub const DELETE_DELAY: Duration = Duration::from_millis(50);
    /// Upper bound (exclusive) of the random jitter added to each step.
    pub const JITTER_MAX_MS: u64 = 50;
    /// Dwell on a fully typed phrase.
    pub const FULL_TEXT_PAUSE: Duration = Duration::from_millis(2000);
    /// Cursor blink half-period.
    pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

    /// Delay between a skill bar becoming visible and its fill.
    pub const SKILL_FILL_DELAY: Duration = Duration::from_millis(200);

    /// Simulated contact form round trip.
    pub const CONTACT_SEND_DELAY: Duration = Duration::from_millis(2000);

    /// Notification slide-in cue.
    pub const NOTIFICATION_ENTER: Duration = Duration::from_millis(100);
    /// Notification lifetime before it closes itself.
    pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(5000);
    /// Notification slide-out before removal.
    pub const NOTIFICATION_EXIT: Duration = Duration::from_millis(300);

    /// Loading screen display time.
    pub const LOADING_DURATION: Duration = Duration::from_millis(2000);
    /// Loading screen fade before removal.
    pub const LOADING_FADE: Duration = Duration::from_millis(500);

    /// Page opacity dip on theme change.
    pub const THEME_DIP: Duration = Duration::from_millis(50);

    /// Smooth scroll frame.
    pub const SCROLL_FRAME: Duration = Duration::from_millis(16);
}

/// Scroll geometry, in page pixels.
pub mod scroll {
    /// Offset added to the scroll position when probing the active section.
    pub const ACTIVE_SECTION_PROBE_PX: u32 = 150;
    /// Clearance left above a section when jumping to it.
    pub const HEADER_CLEARANCE_PX: u32 = 100;
    /// Scroll position past which the back-to-top affordance shows.
    pub const BACK_TO_TOP_THRESHOLD_PX: u32 = 500;
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height: title row, nav row, indicator row.
    pub const HEADER_HEIGHT: u16 = 3;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
    /// Notification toast width in cells.
    pub const NOTIFICATION_WIDTH: u16 = 48;
    /// Notification toast height in cells.
    pub const NOTIFICATION_HEIGHT: u16 = 3;
    /// Search results dropdown width.
    pub const SEARCH_WIDTH: u16 = 40;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 65;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 80;
    /// Loading screen width percentage.
    pub const LOADING_WIDTH: u16 = 40;
    /// Loading screen height percentage.
    pub const LOADING_HEIGHT: u16 = 30;
}
