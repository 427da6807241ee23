//! Loading screen shown while the page "loads".

/// Loading screen phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingScreen {
    /// Covering the page
    #[default]
    Visible,
    /// Marked loaded, fading out
    Fading,
    /// Gone for good
    Removed,
}

impl LoadingScreen {
    /// Loading finished; start fading.
    pub fn finish(&mut self) {
        if *self == LoadingScreen::Visible {
            *self = LoadingScreen::Fading;
        }
    }

    /// Fade finished; detach.
    pub fn remove(&mut self) {
        *self = LoadingScreen::Removed;
    }
}
