//! Application state and logic.
//!
//! This module owns every page component, the timer queue that drives them,
//! and the mapping from user actions to component operations.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info, warn};
use rand::rngs::StdRng;

use crate::catalog::{self, Catalog, Filter};
use crate::constants::{layout, timing, CELL_HEIGHT_PX};
use crate::contact::{ContactForm, Submit, SENT_MESSAGE};
use crate::event::Action;
use crate::loading::LoadingScreen;
use crate::nav::{self, NavBar, SmoothScroll};
use crate::notify::{NotificationId, Notifier, Severity};
use crate::page::{ElementId, ElementIds, Hook, PageLayout, SectionId, Span, StaticElements};
use crate::prefs::PreferenceStore;
use crate::reveal::{Animation, RegistrationId, RevealEngine, ViewportWatcher, WatchOptions};
use crate::scheduler::Scheduler;
use crate::search::SearchBox;
use crate::skills::{self, SkillBoard};
use crate::theme::{Theme, ThemeController};
use crate::typewriter::{self, Typewriter};

/// Skill bars count as seen once half of them is on screen.
const SKILL_BAR_THRESHOLD: f32 = 0.5;
/// Pixels shaved off the bottom of the viewport for skill bars.
const SKILL_BAR_MARGIN_PX: u32 = 50;

/// Viewport height used until the first resize.
const DEFAULT_VIEWPORT_ROWS: u16 = 24;

/// Deferred work, fired by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    TypewriterStep,
    CursorBlink,
    SkillFill { category: usize, skill: usize },
    ContactSent,
    NotificationShown(NotificationId),
    NotificationExpire(NotificationId),
    NotificationRemove(NotificationId),
    LoadingDone,
    LoadingRemoved,
    ThemeDipEnd,
    ScrollFrame,
}

/// Where key presses go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Scrolling and page controls
    Browse,
    /// Typing into the contact form
    Form,
    /// Typing into the search box
    Search,
}

/// Main application state.
pub struct App {
    scheduler: Scheduler<Timer>,
    rng: StdRng,

    // --- Page structure ---
    ids: ElementIds,
    pub statics: StaticElements,
    pub layout: PageLayout,
    pub reveal: RevealEngine<ViewportWatcher>,
    skill_registration: Option<RegistrationId>,

    // --- Scrolling ---
    /// Page offset in rows
    pub scroll_rows: u32,
    /// Height of the page area in rows
    pub viewport_rows: u16,
    pub nav: NavBar,
    smooth: SmoothScroll,
    scroll_frame_pending: bool,

    // --- Components ---
    pub typewriter: Typewriter,
    pub skills: SkillBoard,
    pub catalog: Catalog,
    pub filter: Filter,
    /// Rendered cards: element and project id, in grid order
    pub cards: Vec<(ElementId, u32)>,
    pub selected_card: usize,
    pub contact: ContactForm,
    pub notifier: Notifier,
    pub theme: ThemeController<Box<dyn PreferenceStore>>,
    pub search: SearchBox,
    pub loading: LoadingScreen,

    // --- Input state ---
    pub mode: Mode,
    pub show_help: bool,
}

impl App {
    /// Builds the page and schedules the startup timers.
    pub fn new(store: Box<dyn PreferenceStore>, catalog: Catalog, rng: StdRng) -> Result<Self> {
        let skills = SkillBoard::new(skills::default_categories());
        let mut ids = ElementIds::new();
        let statics = StaticElements::allocate(&mut ids, &skills.shape());
        let layout = PageLayout::compose(&statics, &[]);

        let mut app = Self {
            scheduler: Scheduler::new(),
            rng,
            ids,
            statics,
            layout,
            reveal: RevealEngine::new(ViewportWatcher::new()),
            skill_registration: None,
            scroll_rows: 0,
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
            nav: NavBar::new(SectionId::ALL.to_vec()),
            smooth: SmoothScroll::default(),
            scroll_frame_pending: false,
            typewriter: Typewriter::new(typewriter::PHRASES)?,
            skills,
            catalog,
            filter: Filter::All,
            cards: Vec::new(),
            selected_card: 0,
            contact: ContactForm::new(),
            notifier: Notifier::new(),
            theme: ThemeController::load(store),
            search: SearchBox::new(),
            loading: LoadingScreen::default(),
            mode: Mode::Browse,
            show_help: false,
        };

        app.register_static_reveals();
        app.render_cards();

        app.scheduler.after(timing::TYPEWRITER_START, Timer::TypewriterStep);
        app.scheduler.after(timing::CURSOR_BLINK, Timer::CursorBlink);
        app.scheduler.after(timing::LOADING_DURATION, Timer::LoadingDone);

        info!(
            "event=page_ready projects={} theme={}",
            app.catalog.projects().len(),
            app.theme.theme()
        );
        Ok(app)
    }

    fn register_static_reveals(&mut self) {
        let registrations = [
            (Hook::HeroContent, Animation::FadeUp),
            (Hook::ProfileContainer, Animation::FadeUp),
            (Hook::SkillCategory, Animation::FadeLeft),
            (Hook::SectionTitle, Animation::FadeDown),
            (Hook::ContactInfo, Animation::FadeRight),
            (Hook::ContactForm, Animation::FadeLeft),
        ];
        for (hook, animation) in registrations {
            let elements = self.layout.select(hook);
            self.reveal
                .register(&elements, Some(animation), WatchOptions::default());
        }

        let bars = self.layout.select(Hook::SkillProgress);
        self.skill_registration = self.reveal.register(
            &bars,
            None,
            WatchOptions::threshold(SKILL_BAR_THRESHOLD).with_bottom_margin(SKILL_BAR_MARGIN_PX),
        );
    }

    /// Replaces the project cards with the ones matching the current filter.
    fn render_cards(&mut self) {
        let old: Vec<ElementId> = self.cards.iter().map(|(element, _)| *element).collect();
        self.reveal.forget(&old);

        let ids = &mut self.ids;
        self.cards = self
            .catalog
            .filter(self.filter)
            .into_iter()
            .map(|project| (ids.allocate(), project.id))
            .collect();
        self.selected_card = 0;

        self.layout = PageLayout::compose(&self.statics, &self.cards);
        let cards = self.layout.select(Hook::FeaturedCard);
        self.reveal
            .register(&cards, Some(Animation::FadeUp), WatchOptions::default());

        debug!(
            "event=catalog_render filter={} cards={}",
            self.filter.label(),
            self.cards.len()
        );

        // The page height changed, so the scroll offset may need clamping.
        self.scroll_to(self.scroll_rows);
        self.on_scroll();
    }

    // --- Time ---

    /// Fires every timer due at or before `now`.
    pub fn advance_to(&mut self, now: Duration) {
        while let Some(timer) = self.scheduler.pop_due(now) {
            self.fire(timer);
        }
    }

    fn fire(&mut self, timer: Timer) {
        match timer {
            Timer::TypewriterStep => {
                let delay = self.typewriter.tick(&mut self.rng);
                self.scheduler.after(delay, Timer::TypewriterStep);
            }
            Timer::CursorBlink => {
                self.typewriter.toggle_cursor();
                self.scheduler.after(timing::CURSOR_BLINK, Timer::CursorBlink);
            }
            Timer::SkillFill { category, skill } => {
                if let Some(level) = self.skills.fill(category, skill) {
                    debug!("event=skill_fill category={category} skill={skill} level={level}");
                }
            }
            Timer::ContactSent => {
                if self.contact.finish_sending() {
                    info!("event=contact_sent status=ok");
                    self.notify(SENT_MESSAGE, Severity::Success);
                }
            }
            Timer::NotificationShown(id) => self.notifier.mark_shown(id),
            Timer::NotificationExpire(id) => self.close_notification(id),
            Timer::NotificationRemove(id) => self.notifier.remove(id),
            Timer::LoadingDone => {
                self.loading.finish();
                self.scheduler.after(timing::LOADING_FADE, Timer::LoadingRemoved);
            }
            Timer::LoadingRemoved => {
                self.loading.remove();
                debug!("event=loading_removed at_ms={}", self.scheduler.now().as_millis());
            }
            Timer::ThemeDipEnd => self.theme.clear_dim(),
            Timer::ScrollFrame => {
                self.scroll_frame_pending = false;
                if let Some(next) = self.smooth.step(self.scroll_rows) {
                    let before = self.scroll_rows;
                    self.scroll_to(next);
                    // The page shrank under the target; stop where it ends.
                    if self.scroll_rows == before {
                        self.smooth.cancel();
                    }
                }
                if self.smooth.is_running() {
                    self.schedule_scroll_frame();
                }
            }
        }
    }

    // --- Scrolling ---

    /// Page offset in pixels.
    pub fn scroll_y(&self) -> u32 {
        self.scroll_rows * CELL_HEIGHT_PX
    }

    /// Largest offset that still fills the viewport.
    pub fn max_scroll_rows(&self) -> u32 {
        self.layout
            .total_rows()
            .saturating_sub(u32::from(self.viewport_rows))
    }

    /// Scrolls to `rows`, clamped to the page. A change counts as a scroll event.
    pub fn scroll_to(&mut self, rows: u32) {
        let rows = rows.min(self.max_scroll_rows());
        if rows != self.scroll_rows {
            self.scroll_rows = rows;
            self.on_scroll();
        }
    }

    /// Updates the viewport from the terminal height.
    pub fn resize(&mut self, terminal_height: u16) {
        let chrome =
            layout::HEADER_HEIGHT + layout::COMMANDS_BAR_HEIGHT + layout::STATUS_BAR_HEIGHT;
        self.viewport_rows = terminal_height.saturating_sub(chrome).max(1);
        self.scroll_to(self.scroll_rows);
        self.on_scroll();
    }

    fn on_scroll(&mut self) {
        let scroll_y = self.scroll_y();
        self.nav.on_scroll(self.layout.sections(), scroll_y);

        let viewport = Span::new(scroll_y, u32::from(self.viewport_rows) * CELL_HEIGHT_PX);
        let layout = &self.layout;
        self.reveal
            .watcher_mut()
            .observe(viewport, |element| layout.rect(element));

        for reveal in self.reveal.dispatch() {
            if Some(reveal.registration) != self.skill_registration {
                continue;
            }
            if let Some((category, skill)) = self.skill_bar_index(reveal.element) {
                self.scheduler
                    .after(timing::SKILL_FILL_DELAY, Timer::SkillFill { category, skill });
            }
        }
    }

    fn skill_bar_index(&self, element: ElementId) -> Option<(usize, usize)> {
        self.statics
            .skill_bars
            .iter()
            .enumerate()
            .find_map(|(category, bars)| {
                bars.iter()
                    .position(|bar| *bar == element)
                    .map(|skill| (category, skill))
            })
    }

    fn schedule_scroll_frame(&mut self) {
        if !self.scroll_frame_pending {
            self.scroll_frame_pending = true;
            self.scheduler.after(timing::SCROLL_FRAME, Timer::ScrollFrame);
        }
    }

    fn smooth_scroll_to(&mut self, target_px: u32) {
        let target = (target_px / CELL_HEIGHT_PX).min(self.max_scroll_rows());
        self.smooth.start(target);
        self.schedule_scroll_frame();
    }

    fn manual_scroll(&mut self, rows: u32) {
        self.smooth.cancel();
        self.scroll_to(rows);
    }

    /// Nav link click: highlight now, then glide to the section.
    pub fn navigate(&mut self, section: SectionId) {
        self.nav.click(section);
        if let Some(bounds) = self.layout.section(section) {
            let target = nav::link_target(bounds);
            debug!("event=nav_click section={} target_px={target}", section.anchor());
            self.smooth_scroll_to(target);
        }
    }

    /// Whether the back-to-top badge shows.
    pub fn back_to_top_visible(&self) -> bool {
        nav::back_to_top_visible(self.scroll_y())
    }

    // --- Notifications ---

    /// Shows a toast and schedules its lifecycle.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = self.notifier.show(message, severity);
        self.scheduler
            .after(timing::NOTIFICATION_ENTER, Timer::NotificationShown(id));
        self.scheduler
            .after(timing::NOTIFICATION_LIFETIME, Timer::NotificationExpire(id));
        id
    }

    fn close_notification(&mut self, id: NotificationId) {
        if self.notifier.close(id) {
            self.scheduler
                .after(timing::NOTIFICATION_EXIT, Timer::NotificationRemove(id));
        }
    }

    // --- Event handling ---

    /// Handles a user action.
    ///
    /// Returns true if the application should quit.
    pub fn handle_action(&mut self, action: Action) -> Result<bool> {
        if action == Action::Quit {
            return Ok(true);
        }

        if self.show_help {
            self.show_help = false;
            return Ok(false);
        }

        match self.mode {
            Mode::Browse => self.handle_browse(action),
            Mode::Form => self.handle_form(action),
            Mode::Search => self.handle_search(action),
        }
        Ok(false)
    }

    fn handle_browse(&mut self, action: Action) {
        let page = u32::from(self.viewport_rows);
        match action {
            Action::ScrollUp => self.manual_scroll(self.scroll_rows.saturating_sub(1)),
            Action::ScrollDown => self.manual_scroll(self.scroll_rows + 1),
            Action::PageUp => self.manual_scroll(self.scroll_rows.saturating_sub(page)),
            Action::PageDown => self.manual_scroll(self.scroll_rows + page),
            Action::NavLink(number) => {
                if let Some(section) = self.nav.link_at(number) {
                    self.navigate(section);
                }
            }
            Action::BackToTop => {
                // Inert while the badge is hidden.
                if self.back_to_top_visible() {
                    self.smooth_scroll_to(0);
                }
            }
            Action::ToggleThemeSwitch => {
                let result = self.theme.toggle_switch();
                self.after_theme_change(result);
            }
            Action::ToggleThemeIcon => {
                let result = self.theme.toggle_icon();
                self.after_theme_change(result);
            }
            Action::NextFilter => self.set_filter(self.filter.cycle(true)),
            Action::PreviousFilter => self.set_filter(self.filter.cycle(false)),
            Action::PreviousCard => self.selected_card = self.selected_card.saturating_sub(1),
            Action::NextCard => {
                if self.selected_card + 1 < self.cards.len() {
                    self.selected_card += 1;
                }
            }
            Action::ViewProject => {
                if let Some(id) = self.selected_project_id() {
                    self.notify(catalog::view_project_message(id), Severity::Info);
                }
            }
            Action::ViewCode => {
                if let Some(id) = self.selected_project_id() {
                    self.notify(catalog::view_code_message(id), Severity::Info);
                }
            }
            Action::EditContact => {
                self.mode = Mode::Form;
                self.navigate(SectionId::Contact);
            }
            Action::Search => self.mode = Mode::Search,
            Action::Dismiss => {
                if let Some(id) = self.notifier.dismiss_latest() {
                    self.scheduler
                        .after(timing::NOTIFICATION_EXIT, Timer::NotificationRemove(id));
                }
            }
            Action::Help => self.show_help = true,
            _ => {}
        }
    }

    fn handle_form(&mut self, action: Action) {
        match action {
            Action::Char(c) => self.contact.input_char(c),
            Action::Backspace => self.contact.input_backspace(),
            Action::NextField => self.contact.focus_next(),
            Action::PreviousField => self.contact.focus_previous(),
            Action::Enter => self.submit_contact(),
            Action::Back => self.mode = Mode::Browse,
            _ => {}
        }
    }

    fn handle_search(&mut self, action: Action) {
        match action {
            Action::Char(c) => self.search.input_char(c),
            Action::Backspace => self.search.input_backspace(),
            Action::Enter => {
                let target = self
                    .search
                    .first_match()
                    .and_then(|item| SectionId::from_link(item.link));
                self.search.close();
                self.mode = Mode::Browse;
                if let Some(section) = target {
                    self.navigate(section);
                }
            }
            Action::Back => {
                self.search.close();
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    /// Presses the contact form's submit button.
    pub fn submit_contact(&mut self) {
        match self.contact.submit() {
            Submit::Sending => {
                info!("event=contact_submit status=sending");
                self.scheduler
                    .after(timing::CONTACT_SEND_DELAY, Timer::ContactSent);
            }
            Submit::Invalid(message) => {
                debug!("event=contact_submit status=invalid");
                self.notify(message, Severity::Error);
            }
            Submit::Ignored => {}
        }
    }

    /// Selects a filter button and re-renders the grid.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.render_cards();
    }

    fn after_theme_change(&mut self, result: Result<Theme>) {
        if let Err(e) = result {
            warn!("event=theme_persist status=error error={e:#}");
            self.notify(format!("Could not save theme preference: {e}"), Severity::Error);
        }
        self.scheduler.after(timing::THEME_DIP, Timer::ThemeDipEnd);
    }

    /// Project id of the selected card.
    pub fn selected_project_id(&self) -> Option<u32> {
        self.cards.get(self.selected_card).map(|(_, id)| *id)
    }
}
