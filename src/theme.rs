//! Light/dark theme.
//!
//! The theme is read once at startup (dark when unset) and written back on
//! every toggle. Both toggle controls go through [`ThemeController::set`], so
//! the document theme, the stored value and the controls never disagree.

use std::fmt;

use anyhow::Result;
use log::info;

use crate::prefs::PreferenceStore;

/// Storage key for the theme.
pub const THEME_KEY: &str = "theme";

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label next to the switch.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }

    /// Icon on the small toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme state plus its controls.
pub struct ThemeController<S> {
    store: S,
    theme: Theme,
    /// Switch position; checked means dark.
    switch_checked: bool,
    /// Page opacity is dipped until the app clears it.
    dimmed: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Loads the stored preference, defaulting to dark.
    pub fn load(store: S) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default();
        info!("event=theme_loaded theme={theme}");
        Self {
            store,
            theme,
            switch_checked: theme == Theme::Dark,
            dimmed: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn switch_checked(&self) -> bool {
        self.switch_checked
    }

    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    /// Ends the opacity dip.
    pub fn clear_dim(&mut self) {
        self.dimmed = false;
    }

    /// The switch was flipped.
    pub fn toggle_switch(&mut self) -> Result<Theme> {
        self.switch_checked = !self.switch_checked;
        let theme = if self.switch_checked {
            Theme::Dark
        } else {
            Theme::Light
        };
        self.set(theme)
    }

    /// The small icon button was pressed.
    pub fn toggle_icon(&mut self) -> Result<Theme> {
        self.set(self.theme.toggled())
    }

    /// Applies `theme` everywhere and persists it.
    ///
    /// The in-memory theme and controls change even if persisting fails.
    pub fn set(&mut self, theme: Theme) -> Result<Theme> {
        self.theme = theme;
        self.switch_checked = theme == Theme::Dark;
        self.dimmed = true;
        info!("event=theme_toggle theme={theme}");
        self.store.set(THEME_KEY, theme.as_str())?;
        Ok(theme)
    }
}

#[cfg(test)]
impl<S> ThemeController<S> {
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;

    fn stored(controller: &ThemeController<MemoryStore>) -> Option<Theme> {
        controller
            .store()
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
    }

    #[test]
    fn test_defaults_to_dark() {
        let controller = ThemeController::load(MemoryStore::default());
        assert_eq!(controller.theme(), Theme::Dark);
        assert!(controller.switch_checked());
        assert_eq!(stored(&controller), None);
    }

    #[test]
    fn test_loads_stored_theme() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "light").unwrap();
        let controller = ThemeController::load(store);
        assert_eq!(controller.theme(), Theme::Light);
        assert!(!controller.switch_checked());
    }

    #[test]
    fn test_garbage_value_falls_back_to_dark() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemeController::load(store).theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_and_agrees() {
        let mut controller = ThemeController::load(MemoryStore::default());
        controller.toggle_switch().unwrap();

        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(stored(&controller), Some(Theme::Light));
        assert!(!controller.switch_checked());
        assert!(controller.is_dimmed());
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "light").unwrap();
        let mut controller = ThemeController::load(store);

        controller.toggle_icon().unwrap();
        controller.toggle_icon().unwrap();
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(stored(&controller), Some(Theme::Light));

        controller.toggle_switch().unwrap();
        controller.toggle_switch().unwrap();
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(stored(&controller), Some(Theme::Light));
    }

    #[test]
    fn test_both_controls_stay_consistent() {
        let mut controller = ThemeController::load(MemoryStore::default());

        controller.toggle_icon().unwrap();
        assert_eq!(controller.theme(), Theme::Light);
        assert!(!controller.switch_checked());

        controller.toggle_switch().unwrap();
        assert_eq!(controller.theme(), Theme::Dark);
        assert!(controller.switch_checked());
        assert_eq!(stored(&controller), Some(Theme::Dark));
    }

    #[test]
    fn test_labels_and_icons() {
        assert_eq!(Theme::Dark.label(), "Dark Mode");
        assert_eq!(Theme::Light.label(), "Light Mode");
        assert_ne!(Theme::Dark.icon(), Theme::Light.icon());
    }

    #[test]
    fn test_dim_clears() {
        let mut controller = ThemeController::load(MemoryStore::default());
        controller.toggle_icon().unwrap();
        controller.clear_dim();
        assert!(!controller.is_dimmed());
    }
}
