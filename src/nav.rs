//! Navigation highlighting and scrolling.
//!
//! The active link follows the scroll position: whichever section contains a
//! probe point a little below the top of the viewport wins. Clicking a link
//! marks it active right away and starts a smooth scroll to the section.

use log::debug;

use crate::constants::scroll;
use crate::page::{SectionBounds, SectionId};

/// Gap between nav links, in cells.
pub const LINK_GAP: u16 = 2;

/// Indicator position under the nav bar, in cells from the bar's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub left: u16,
    pub width: u16,
}

/// Section whose extent contains `scroll_y` + probe offset.
///
/// Sections are scanned in page order and the last match wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: u32) -> Option<SectionId> {
    let probe = scroll_y + scroll::ACTIVE_SECTION_PROBE_PX;
    sections
        .iter()
        .filter(|s| s.span.contains(probe))
        .map(|s| s.id)
        .last()
}

/// Scroll target for a nav link: the section top minus header clearance.
pub fn link_target(section: &SectionBounds) -> u32 {
    section.span.top.saturating_sub(scroll::HEADER_CLEARANCE_PX)
}

/// Whether the back-to-top affordance shows.
pub fn back_to_top_visible(scroll_y: u32) -> bool {
    scroll_y > scroll::BACK_TO_TOP_THRESHOLD_PX
}

/// Nav bar state.
#[derive(Debug, Clone)]
pub struct NavBar {
    links: Vec<SectionId>,
    active: Option<SectionId>,
    indicator: Option<Indicator>,
}

impl NavBar {
    pub fn new(links: Vec<SectionId>) -> Self {
        Self {
            links,
            active: None,
            indicator: None,
        }
    }

    pub fn links(&self) -> &[SectionId] {
        &self.links
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn indicator(&self) -> Option<Indicator> {
        self.indicator
    }

    /// Recomputes the active link after a scroll.
    pub fn on_scroll(&mut self, sections: &[SectionBounds], scroll_y: u32) {
        let current = active_section(sections, scroll_y);
        if current != self.active {
            debug!("event=nav_active section={:?} scroll_y={scroll_y}", current);
        }
        self.set_active(current);
    }

    /// Marks a link active without waiting for any scroll.
    pub fn click(&mut self, section: SectionId) {
        self.set_active(Some(section));
    }

    fn set_active(&mut self, section: Option<SectionId>) {
        self.active = section.filter(|s| self.links.contains(s));
        if let Some(active) = self.active {
            self.indicator = self.link_rect(active);
        }
    }

    /// On-screen rectangle of a link's label.
    pub fn link_rect(&self, section: SectionId) -> Option<Indicator> {
        let mut left = 0;
        for link in &self.links {
            let width = link.label().chars().count() as u16;
            if *link == section {
                return Some(Indicator { left, width });
            }
            left += width + LINK_GAP;
        }
        None
    }

    /// Link for a 1-based number key.
    pub fn link_at(&self, number: usize) -> Option<SectionId> {
        number.checked_sub(1).and_then(|i| self.links.get(i)).copied()
    }
}

/// Smooth scroll towards a target, one frame at a time.
///
/// Works in whatever unit the caller scrolls by (the app uses rows).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmoothScroll {
    target: Option<u32>,
}

impl SmoothScroll {
    pub fn start(&mut self, target: u32) {
        self.target = Some(target);
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_running(&self) -> bool {
        self.target.is_some()
    }

    /// Next scroll position from `current`, or `None` when done.
    ///
    /// Covers a quarter of the remaining distance per frame, at least one
    /// unit, and lands exactly on the target.
    pub fn step(&mut self, current: u32) -> Option<u32> {
        let target = self.target?;
        if current == target {
            self.target = None;
            return None;
        }

        let distance = current.abs_diff(target);
        let stride = (distance / 4).max(1);
        let next = if distance <= stride {
            target
        } else if target > current {
            current + stride
        } else {
            current - stride
        };

        if next == target {
            self.target = None;
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Span;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: SectionId::Home, span: Span::new(0, 600) },
            SectionBounds { id: SectionId::About, span: Span::new(600, 400) },
            SectionBounds { id: SectionId::Skills, span: Span::new(1000, 800) },
            SectionBounds { id: SectionId::Projects, span: Span::new(1800, 900) },
            SectionBounds { id: SectionId::Contact, span: Span::new(2700, 700) },
        ]
    }

    fn nav() -> NavBar {
        NavBar::new(SectionId::ALL.to_vec())
    }

    #[test]
    fn test_top_of_page_highlights_first_section() {
        let mut nav = nav();
        nav.on_scroll(&sections(), 0);
        assert_eq!(nav.active(), Some(SectionId::Home));
    }

    #[test]
    fn test_scrolling_into_skills() {
        let mut nav = nav();
        nav.on_scroll(&sections(), 0);
        // 900 + 150 falls inside skills [1000, 1800).
        nav.on_scroll(&sections(), 900);
        assert_eq!(nav.active(), Some(SectionId::Skills));
        assert_eq!(nav.indicator(), nav.link_rect(SectionId::Skills));
    }

    #[test]
    fn test_probe_boundary() {
        // Probe lands exactly on the skills top.
        assert_eq!(active_section(&sections(), 850), Some(SectionId::Skills));
        assert_eq!(active_section(&sections(), 849), Some(SectionId::About));
    }

    #[test]
    fn test_past_last_section_clears_active() {
        let mut nav = nav();
        nav.on_scroll(&sections(), 900);
        let indicator = nav.indicator();

        nav.on_scroll(&sections(), 5000);
        assert_eq!(nav.active(), None);
        // The indicator stays where it was.
        assert_eq!(nav.indicator(), indicator);
    }

    #[test]
    fn test_click_marks_active_immediately() {
        let mut nav = nav();
        nav.on_scroll(&sections(), 0);
        nav.click(SectionId::Contact);
        assert_eq!(nav.active(), Some(SectionId::Contact));
    }

    #[test]
    fn test_link_target_leaves_header_clearance() {
        let s = sections();
        assert_eq!(link_target(&s[2]), 900);
        assert_eq!(link_target(&s[0]), 0);
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(0));
        assert!(!back_to_top_visible(500));
        assert!(back_to_top_visible(501));
    }

    #[test]
    fn test_link_rects_are_laid_out_left_to_right() {
        let nav = nav();
        assert_eq!(nav.link_rect(SectionId::Home), Some(Indicator { left: 0, width: 4 }));
        // "Home" + gap
        assert_eq!(nav.link_rect(SectionId::About), Some(Indicator { left: 6, width: 5 }));
    }

    #[test]
    fn test_link_at_number() {
        let nav = nav();
        assert_eq!(nav.link_at(1), Some(SectionId::Home));
        assert_eq!(nav.link_at(5), Some(SectionId::Contact));
        assert_eq!(nav.link_at(0), None);
        assert_eq!(nav.link_at(6), None);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut smooth = SmoothScroll::default();
        smooth.start(100);

        let mut position = 0;
        let mut frames = 0;
        while let Some(next) = smooth.step(position) {
            assert!(next > position);
            position = next;
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(position, 100);
        assert!(!smooth.is_running());
    }

    #[test]
    fn test_smooth_scroll_upwards() {
        let mut smooth = SmoothScroll::default();
        smooth.start(0);
        let mut position = 50;
        while let Some(next) = smooth.step(position) {
            assert!(next < position);
            position = next;
        }
        assert_eq!(position, 0);
    }
}
