//! Transient notifications.
//!
//! A notification slides in shortly after it is created, closes itself after
//! a fixed lifetime (or when dismissed), and is removed once its exit
//! animation has run. Timers are owned by the app; this module only tracks
//! state and ignores timers for notifications that are already gone.

/// Severity or category for user-visible notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Indicates a successful operation.
    Success,
    /// Indicates a failed operation or rejected input.
    Error,
    /// A non-critical issue.
    Warning,
    /// Neutral information.
    Info,
}

impl Severity {
    /// Terminal glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "▲",
            Severity::Info => "ℹ",
        }
    }
}

/// Animation phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, not yet slid in
    Entering,
    /// Fully visible
    Shown,
    /// Sliding out, about to be removed
    Leaving,
}

/// Notification handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

/// A notification on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

/// Notifications currently attached to the page, oldest first.
#[derive(Debug, Default)]
pub struct Notifier {
    next_id: u64,
    active: Vec<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notification in the entering phase.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.active.push(Notification {
            id,
            message: message.into(),
            severity,
            phase: Phase::Entering,
        });
        id
    }

    /// Entry cue elapsed.
    pub fn mark_shown(&mut self, id: NotificationId) {
        if let Some(n) = self.find_mut(id) {
            if n.phase == Phase::Entering {
                n.phase = Phase::Shown;
            }
        }
    }

    /// Starts closing. Returns true if the notification was open, so the
    /// caller knows to schedule its removal.
    pub fn close(&mut self, id: NotificationId) -> bool {
        match self.find_mut(id) {
            Some(n) if n.phase != Phase::Leaving => {
                n.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Closes the newest open notification.
    pub fn dismiss_latest(&mut self) -> Option<NotificationId> {
        let id = self
            .active
            .iter()
            .rev()
            .find(|n| n.phase != Phase::Leaving)
            .map(|n| n.id)?;
        self.close(id);
        Some(id)
    }

    /// Detaches a notification. Unknown ids are ignored.
    pub fn remove(&mut self, id: NotificationId) {
        self.active.retain(|n| n.id != id);
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id == id)
    }

    fn find_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.active.iter_mut().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut notifier = Notifier::new();
        let id = notifier.show("hello", Severity::Info);
        assert_eq!(notifier.get(id).unwrap().phase, Phase::Entering);

        notifier.mark_shown(id);
        assert_eq!(notifier.get(id).unwrap().phase, Phase::Shown);

        assert!(notifier.close(id));
        assert_eq!(notifier.get(id).unwrap().phase, Phase::Leaving);

        notifier.remove(id);
        assert!(notifier.get(id).is_none());
    }

    #[test]
    fn test_close_twice_only_schedules_once() {
        let mut notifier = Notifier::new();
        let id = notifier.show("bye", Severity::Success);
        assert!(notifier.close(id));
        assert!(!notifier.close(id));
    }

    #[test]
    fn test_timers_for_removed_notification_are_ignored() {
        let mut notifier = Notifier::new();
        let id = notifier.show("gone", Severity::Error);
        notifier.remove(id);

        notifier.mark_shown(id);
        assert!(!notifier.close(id));
        notifier.remove(id);
        assert!(notifier.active().is_empty());
    }

    #[test]
    fn test_dismiss_latest_skips_leaving() {
        let mut notifier = Notifier::new();
        let first = notifier.show("one", Severity::Info);
        let second = notifier.show("two", Severity::Warning);

        assert_eq!(notifier.dismiss_latest(), Some(second));
        assert_eq!(notifier.dismiss_latest(), Some(first));
        assert_eq!(notifier.dismiss_latest(), None);
    }
}
