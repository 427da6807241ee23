//! Typewriter effect for the hero tagline.
//!
//! The driver is a three-state machine with a single [`Typewriter::tick`]
//! transition. It never sleeps: each tick returns how long to wait before the
//! next one and the caller's scheduler decides when that is.

use std::time::Duration;

use anyhow::{bail, Result};
use rand::Rng;

use crate::constants::timing;

/// Phrases cycled through in the hero section.
pub const PHRASES: [&str; 8] = [
    "digital experiences",
    "web applications",
    "creative solutions",
    "efficient code",
    "user interfaces",
    "backend systems",
    "automation tools",
    "machine learning models",
];

/// Where the typewriter is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appending characters to the current phrase
    Typing,
    /// Holding the full phrase on screen
    PausedAtFullText,
    /// Removing characters from the end
    Deleting,
}

/// Typing session state.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
    text: String,
    cursor_visible: bool,
}

impl Typewriter {
    /// Creates a typewriter over `phrases`.
    ///
    /// The phrase list must not be empty.
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|phrase| phrase.as_ref().chars().collect())
            .collect();

        if phrases.is_empty() {
            bail!("typewriter needs at least one phrase");
        }

        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            text: String::new(),
            cursor_visible: true,
        })
    }

    /// Runs one step and returns the delay before the next one.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Duration {
        match self.phase {
            Phase::Typing => {
                self.type_char();
                if self.char_index == self.current_phrase().len() {
                    self.phase = Phase::PausedAtFullText;
                    return timing::FULL_TEXT_PAUSE;
                }
                timing::TYPE_DELAY + jitter(rng)
            }
            Phase::PausedAtFullText => {
                // The dwell ends straight into the first delete.
                self.phase = Phase::Deleting;
                self.delete_char();
                timing::DELETE_DELAY + jitter(rng)
            }
            Phase::Deleting => {
                self.delete_char();
                timing::DELETE_DELAY + jitter(rng)
            }
        }
    }

    fn type_char(&mut self) {
        let phrase = &self.phrases[self.phrase_index];
        if let Some(c) = phrase.get(self.char_index) {
            self.text.push(*c);
            self.char_index += 1;
        }
    }

    fn delete_char(&mut self) {
        self.text.pop();
        self.char_index = self.char_index.saturating_sub(1);
        if self.char_index == 0 {
            self.phase = Phase::Typing;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        }
    }

    fn current_phrase(&self) -> &[char] {
        &self.phrases[self.phrase_index]
    }

    /// Flips cursor visibility; driven by its own fixed-rate timer.
    pub fn toggle_cursor(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// Text currently on screen.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}

fn jitter<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(0..timing::JITTER_MAX_MS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Ticks until the typewriter leaves `phase`, returning the number of ticks.
    fn run_through(tw: &mut Typewriter, phase: Phase, rng: &mut StdRng) -> usize {
        let mut ticks = 0;
        while tw.phase == phase {
            tw.tick(rng);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let phrases: Vec<&str> = Vec::new();
        assert!(Typewriter::new(phrases).is_err());
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut rng = rng();
        let mut tw = Typewriter::new(["abc"]).unwrap();

        tw.tick(&mut rng);
        assert_eq!(tw.text(), "a");
        tw.tick(&mut rng);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase, Phase::Typing);
    }

    #[test]
    fn test_pauses_at_full_text() {
        let mut rng = rng();
        let mut tw = Typewriter::new(["hi"]).unwrap();

        tw.tick(&mut rng);
        let delay = tw.tick(&mut rng);

        assert_eq!(tw.text(), "hi");
        assert_eq!(tw.phase, Phase::PausedAtFullText);
        assert_eq!(delay, timing::FULL_TEXT_PAUSE);
    }

    #[test]
    fn test_dwell_ends_with_first_delete() {
        let mut rng = rng();
        let mut tw = Typewriter::new(["hey", "yo"]).unwrap();
        run_through(&mut tw, Phase::Typing, &mut rng);

        tw.tick(&mut rng);
        assert_eq!(tw.phase, Phase::Deleting);
        assert_eq!(tw.text(), "he");
    }

    #[test]
    fn test_delete_to_empty_advances_phrase() {
        let mut rng = rng();
        let mut tw = Typewriter::new(["ab", "cd"]).unwrap();
        run_through(&mut tw, Phase::Typing, &mut rng);
        run_through(&mut tw, Phase::PausedAtFullText, &mut rng);
        run_through(&mut tw, Phase::Deleting, &mut rng);

        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase, Phase::Typing);
        assert_eq!(tw.phrase_index, 1);

        tw.tick(&mut rng);
        assert_eq!(tw.text(), "c");
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut rng = rng();
        let mut tw = Typewriter::new(PHRASES).unwrap();
        let start = tw.phrase_index;

        for _ in 0..tw.phrases.len() {
            run_through(&mut tw, Phase::Typing, &mut rng);
            run_through(&mut tw, Phase::PausedAtFullText, &mut rng);
            run_through(&mut tw, Phase::Deleting, &mut rng);
            assert_eq!(tw.text(), "");
        }

        assert_eq!(tw.phrase_index, start);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_step_delays_stay_in_range() {
        let mut rng = rng();
        let mut tw = Typewriter::new(["typing"]).unwrap();

        for _ in 0..200 {
            let phase = tw.phase;
            let delay = tw.tick(&mut rng);
            match phase {
                Phase::Typing if tw.phase == Phase::PausedAtFullText => {
                    assert_eq!(delay, timing::FULL_TEXT_PAUSE)
                }
                Phase::Typing => {
                    assert!(delay >= Duration::from_millis(100));
                    assert!(delay < Duration::from_millis(150));
                }
                Phase::PausedAtFullText | Phase::Deleting => {
                    assert!(delay >= Duration::from_millis(50));
                    assert!(delay < Duration::from_millis(100));
                }
            }
        }
    }

    #[test]
    fn test_multibyte_phrases_type_by_char() {
        let mut rng = rng();
        let mut tw = Typewriter::new(["café"]).unwrap();
        run_through(&mut tw, Phase::Typing, &mut rng);
        assert_eq!(tw.text(), "café");

        tw.tick(&mut rng);
        assert_eq!(tw.text(), "caf");
    }

    #[test]
    fn test_cursor_toggles() {
        let mut tw = Typewriter::new(PHRASES).unwrap();
        assert!(tw.cursor_visible());
        tw.toggle_cursor();
        assert!(!tw.cursor_visible());
        tw.toggle_cursor();
        assert!(tw.cursor_visible());
    }
}
