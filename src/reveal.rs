//! Reveal-on-scroll engine.
//!
//! Elements are registered together with an animation and a visibility
//! threshold. The first time an element becomes visible enough, the animation
//! marker is applied and the element stops being watched for that
//! registration. Visibility itself comes from a [`VisibilityWatcher`], so the
//! engine never needs to know about scrolling.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::page::{ElementId, Span};

/// Entrance animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animation {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
}

/// When an element counts as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Fraction of the element's height that must be on screen.
    pub threshold: f32,
    /// Pixels shaved off the bottom of the viewport before measuring.
    pub bottom_margin_px: u32,
}

impl WatchOptions {
    pub fn threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn with_bottom_margin(mut self, px: u32) -> Self {
        self.bottom_margin_px = px;
        self
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 0,
        }
    }
}

/// Identifies one `register` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(u32);

/// A watched (registration, element) pair.
pub type WatchKey = (RegistrationId, ElementId);

/// Reports when watched elements first become visible.
pub trait VisibilityWatcher {
    /// Starts watching an element on behalf of a registration.
    fn watch(&mut self, key: WatchKey, options: WatchOptions);
    /// Stops watching. Unknown keys are ignored.
    fn unwatch(&mut self, key: WatchKey);
    /// Returns the keys that crossed their threshold since the last call.
    fn drain_triggered(&mut self) -> Vec<WatchKey>;
}

/// Measures elements against the scrolled viewport.
#[derive(Debug, Default)]
pub struct ViewportWatcher {
    watched: Vec<Watched>,
    triggered: Vec<WatchKey>,
}

#[derive(Debug)]
struct Watched {
    key: WatchKey,
    options: WatchOptions,
    fired: bool,
}

impl ViewportWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-measures every watched element against `viewport`.
    ///
    /// `geometry` returns `None` for elements that are no longer on the page.
    pub fn observe<F>(&mut self, viewport: Span, geometry: F)
    where
        F: Fn(ElementId) -> Option<Span>,
    {
        for watched in self.watched.iter_mut().filter(|w| !w.fired) {
            let Some(rect) = geometry(watched.key.1) else {
                continue;
            };
            let root = Span::new(
                viewport.top,
                viewport.height.saturating_sub(watched.options.bottom_margin_px),
            );
            if is_visible(rect, root, watched.options.threshold) {
                watched.fired = true;
                self.triggered.push(watched.key);
            }
        }
    }
}

#[cfg(test)]
impl ViewportWatcher {
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Whether any registration still watches `element`.
    pub fn is_watching(&self, element: ElementId) -> bool {
        self.watched.iter().any(|w| w.key.1 == element)
    }
}

impl VisibilityWatcher for ViewportWatcher {
    fn watch(&mut self, key: WatchKey, options: WatchOptions) {
        self.watched.push(Watched {
            key,
            options,
            fired: false,
        });
    }

    fn unwatch(&mut self, key: WatchKey) {
        self.watched.retain(|w| w.key != key);
        self.triggered.retain(|k| *k != key);
    }

    fn drain_triggered(&mut self) -> Vec<WatchKey> {
        std::mem::take(&mut self.triggered)
    }
}

/// Intersection test: some overlap, and at least `threshold` of the element.
fn is_visible(rect: Span, root: Span, threshold: f32) -> bool {
    if rect.height == 0 {
        return root.contains(rect.top);
    }
    let overlap = rect.overlap(&root);
    if overlap == 0 {
        return false;
    }
    let ratio = overlap as f32 / rect.height as f32;
    ratio >= threshold
}

/// An element that was just revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub registration: RegistrationId,
    pub element: ElementId,
    pub animation: Option<Animation>,
}

#[derive(Debug)]
struct Registration {
    animation: Option<Animation>,
    pending: HashSet<ElementId>,
}

/// Applies animation markers to elements the first time they are seen.
#[derive(Debug)]
pub struct RevealEngine<W> {
    watcher: W,
    registrations: HashMap<RegistrationId, Registration>,
    next_id: u32,
    /// Elements hidden until revealed ("scroll-animate").
    prepared: HashSet<ElementId>,
    markers: HashMap<ElementId, Vec<Animation>>,
}

impl<W: VisibilityWatcher> RevealEngine<W> {
    pub fn new(watcher: W) -> Self {
        Self {
            watcher,
            registrations: HashMap::new(),
            next_id: 0,
            prepared: HashSet::new(),
            markers: HashMap::new(),
        }
    }

    /// Watches `elements`, applying `animation` to each on first visibility.
    ///
    /// With `animation` set to `None` the elements are only watched: the
    /// caller learns about them through [`RevealEngine::dispatch`] but nothing
    /// is hidden or marked. Returns `None` when there is nothing to watch.
    pub fn register(
        &mut self,
        elements: &[ElementId],
        animation: Option<Animation>,
        options: WatchOptions,
    ) -> Option<RegistrationId> {
        if elements.is_empty() {
            return None;
        }

        let id = RegistrationId(self.next_id);
        self.next_id += 1;

        for element in elements {
            if animation.is_some() {
                self.prepared.insert(*element);
            }
            self.watcher.watch((id, *element), options);
        }

        debug!(
            "event=reveal_register registration={} elements={} animation={:?} threshold={}",
            id.0,
            elements.len(),
            animation,
            options.threshold
        );

        self.registrations.insert(
            id,
            Registration {
                animation,
                pending: elements.iter().copied().collect(),
            },
        );
        Some(id)
    }

    /// Applies markers for everything the watcher reported since last time.
    pub fn dispatch(&mut self) -> Vec<Reveal> {
        let mut revealed = Vec::new();

        for key @ (registration_id, element) in self.watcher.drain_triggered() {
            let Some(registration) = self.registrations.get_mut(&registration_id) else {
                continue;
            };
            if !registration.pending.remove(&element) {
                continue;
            }
            self.watcher.unwatch(key);

            if let Some(animation) = registration.animation {
                let markers = self.markers.entry(element).or_default();
                if !markers.contains(&animation) {
                    markers.push(animation);
                }
            }

            revealed.push(Reveal {
                registration: registration_id,
                element,
                animation: registration.animation,
            });
        }

        self.registrations.retain(|_, r| !r.pending.is_empty());
        revealed
    }

    /// Drops all state for elements that left the page.
    pub fn forget(&mut self, elements: &[ElementId]) {
        for element in elements {
            self.prepared.remove(element);
            self.markers.remove(element);
            for (id, registration) in self.registrations.iter_mut() {
                if registration.pending.remove(element) {
                    self.watcher.unwatch((*id, *element));
                }
            }
        }
        self.registrations.retain(|_, r| !r.pending.is_empty());
    }

    /// Markers applied to `element`, in the order they were applied.
    pub fn markers(&self, element: ElementId) -> &[Animation] {
        self.markers.get(&element).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the element is waiting for its entrance animation.
    pub fn is_hidden(&self, element: ElementId) -> bool {
        self.prepared.contains(&element) && self.markers(element).is_empty()
    }

    pub fn watcher_mut(&mut self) -> &mut W {
        &mut self.watcher
    }
}

#[cfg(test)]
impl<W> RevealEngine<W> {
    /// Whether `registration` still waits on `element`.
    pub fn is_pending(&self, registration: RegistrationId, element: ElementId) -> bool {
        self.registrations
            .get(&registration)
            .is_some_and(|r| r.pending.contains(&element))
    }

    pub fn watcher(&self) -> &W {
        &self.watcher
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::page::ElementIds;

    /// Watcher that fires only when told to.
    #[derive(Debug, Default)]
    pub(crate) struct ManualWatcher {
        pub watched: Vec<(WatchKey, WatchOptions)>,
        fired: Vec<WatchKey>,
    }

    impl ManualWatcher {
        /// Fires every watch on `element`, whether or not it is still watched.
        pub fn fire_element(&mut self, element: ElementId, registrations: &[RegistrationId]) {
            for registration in registrations {
                self.fired.push((*registration, element));
            }
        }
    }

    impl VisibilityWatcher for ManualWatcher {
        fn watch(&mut self, key: WatchKey, options: WatchOptions) {
            self.watched.push((key, options));
        }

        fn unwatch(&mut self, key: WatchKey) {
            self.watched.retain(|(k, _)| *k != key);
        }

        fn drain_triggered(&mut self) -> Vec<WatchKey> {
            std::mem::take(&mut self.fired)
        }
    }

    fn elements(n: usize) -> Vec<ElementId> {
        ElementIds::new().allocate_many(n)
    }

    #[test]
    fn test_register_no_elements_is_noop() {
        let mut engine = RevealEngine::new(ManualWatcher::default());
        assert!(engine
            .register(&[], Some(Animation::FadeUp), WatchOptions::default())
            .is_none());
        assert!(engine.watcher().watched.is_empty());
    }

    #[test]
    fn test_register_hides_until_revealed() {
        let els = elements(2);
        let mut engine = RevealEngine::new(ManualWatcher::default());
        let reg = engine
            .register(&els, Some(Animation::FadeUp), WatchOptions::default())
            .unwrap();

        assert!(engine.is_hidden(els[0]));
        engine.watcher_mut().fire_element(els[0], &[reg]);
        let revealed = engine.dispatch();

        assert_eq!(revealed.len(), 1);
        assert_eq!(engine.markers(els[0]), &[Animation::FadeUp]);
        assert!(!engine.is_hidden(els[0]));
        assert!(engine.is_hidden(els[1]));
    }

    #[test]
    fn test_reveal_happens_at_most_once() {
        let els = elements(1);
        let mut engine = RevealEngine::new(ManualWatcher::default());
        let reg = engine
            .register(&els, Some(Animation::FadeLeft), WatchOptions::default())
            .unwrap();

        engine.watcher_mut().fire_element(els[0], &[reg]);
        assert_eq!(engine.dispatch().len(), 1);
        assert!(engine.watcher().watched.is_empty());

        // Leaving and re-entering the viewport changes nothing.
        engine.watcher_mut().fire_element(els[0], &[reg]);
        engine.watcher_mut().fire_element(els[0], &[reg]);
        assert!(engine.dispatch().is_empty());
        assert_eq!(engine.markers(els[0]), &[Animation::FadeLeft]);
    }

    #[test]
    fn test_registrations_are_independent() {
        let els = elements(1);
        let mut engine = RevealEngine::new(ManualWatcher::default());
        let up = engine
            .register(&els, Some(Animation::FadeUp), WatchOptions::default())
            .unwrap();
        let down = engine
            .register(&els, Some(Animation::FadeDown), WatchOptions::threshold(0.5))
            .unwrap();

        engine.watcher_mut().fire_element(els[0], &[up]);
        engine.dispatch();
        assert!(!engine.is_pending(up, els[0]));
        assert!(engine.is_pending(down, els[0]));

        engine.watcher_mut().fire_element(els[0], &[down]);
        engine.dispatch();
        assert_eq!(engine.markers(els[0]), &[Animation::FadeUp, Animation::FadeDown]);
    }

    #[test]
    fn test_watch_only_registration_leaves_element_visible() {
        let els = elements(1);
        let mut engine = RevealEngine::new(ManualWatcher::default());
        let reg = engine
            .register(&els, None, WatchOptions::threshold(0.5).with_bottom_margin(50))
            .unwrap();

        assert!(!engine.is_hidden(els[0]));
        assert_eq!(engine.watcher().watched[0].1.bottom_margin_px, 50);

        engine.watcher_mut().fire_element(els[0], &[reg]);
        let revealed = engine.dispatch();
        assert_eq!(revealed[0].animation, None);
        assert!(engine.markers(els[0]).is_empty());
    }

    #[test]
    fn test_forget_stops_watching() {
        let els = elements(2);
        let mut engine = RevealEngine::new(ManualWatcher::default());
        let reg = engine
            .register(&els, Some(Animation::FadeUp), WatchOptions::default())
            .unwrap();

        engine.forget(&els[..1]);
        assert_eq!(engine.watcher().watched.len(), 1);
        assert!(!engine.is_pending(reg, els[0]));

        engine.watcher_mut().fire_element(els[0], &[reg]);
        assert!(engine.dispatch().is_empty());
    }

    #[test]
    fn test_viewport_watcher_threshold() {
        let els = elements(2);
        let mut watcher = ViewportWatcher::new();
        let reg = RegistrationId(0);
        watcher.watch((reg, els[0]), WatchOptions::threshold(0.5));
        watcher.watch((reg, els[1]), WatchOptions::threshold(0.5));

        // Element 0 fully inside, element 1 only 25% inside.
        let geometry = |id: ElementId| {
            if id == els[0] {
                Some(Span::new(100, 100))
            } else {
                Some(Span::new(375, 100))
            }
        };
        watcher.observe(Span::new(0, 400), geometry);

        assert_eq!(watcher.drain_triggered(), vec![(reg, els[0])]);
    }

    #[test]
    fn test_viewport_watcher_bottom_margin() {
        let els = elements(1);
        let mut watcher = ViewportWatcher::new();
        let reg = RegistrationId(0);
        watcher.watch((reg, els[0]), WatchOptions::threshold(0.5).with_bottom_margin(50));

        // 60% inside the raw viewport but only 10% inside the shrunk one.
        let geometry = |_| Some(Span::new(340, 100));
        watcher.observe(Span::new(0, 400), geometry);
        assert!(watcher.drain_triggered().is_empty());

        watcher.observe(Span::new(100, 400), geometry);
        assert_eq!(watcher.drain_triggered(), vec![(reg, els[0])]);
    }

    #[test]
    fn test_viewport_watcher_fires_once_and_skips_missing() {
        let els = elements(2);
        let mut watcher = ViewportWatcher::new();
        let reg = RegistrationId(0);
        watcher.watch((reg, els[0]), WatchOptions::default());
        watcher.watch((reg, els[1]), WatchOptions::default());

        let geometry = |id: ElementId| (id == els[0]).then(|| Span::new(0, 32));
        watcher.observe(Span::new(0, 400), geometry);
        watcher.observe(Span::new(0, 400), geometry);

        assert_eq!(watcher.drain_triggered(), vec![(reg, els[0])]);
    }

    #[test]
    fn test_engine_with_viewport_watcher() {
        let els = elements(2);
        let mut engine = RevealEngine::new(ViewportWatcher::new());
        engine.register(&els, Some(Animation::FadeUp), WatchOptions::default());

        let geometry = |id: ElementId| {
            if id == els[0] {
                Some(Span::new(0, 100))
            } else {
                Some(Span::new(1000, 100))
            }
        };
        engine.watcher_mut().observe(Span::new(0, 400), geometry);
        engine.dispatch();
        assert!(!engine.is_hidden(els[0]));
        assert!(engine.is_hidden(els[1]));
        assert_eq!(engine.watcher().watched_count(), 1);

        engine.watcher_mut().observe(Span::new(800, 400), geometry);
        engine.dispatch();
        assert!(!engine.is_hidden(els[1]));
        assert_eq!(engine.watcher().watched_count(), 0);
    }
}
