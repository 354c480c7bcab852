//! Click Gesture Utilities
//!
//! Tells a single click apart from a double click on the same target.
//! A click arms a short timer and only counts once that timer runs out;
//! a double click disarms it, so one physical gesture has exactly one outcome.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Wait before a lone click is accepted
pub const DEFAULT_CLICK_DELAY: Duration = Duration::from_millis(250);

/// Click state of one target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClickState {
    #[default]
    Idle,
    /// Clicked, waiting to see whether a double click follows
    Pending,
}

/// Timer that resolves pending clicks.
///
/// `start` must eventually lead to [`ClickGestures::elapsed`] for the same key
/// unless `cancel` is called first.
pub trait GestureTimer<K> {
    fn start(&mut self, key: K, delay: Duration);
    fn cancel(&mut self, key: K);
}

/// Per-key click/double-click state machine
pub struct ClickGestures<K, T> {
    states: HashMap<K, ClickState>,
    timer: T,
    delay: Duration,
}

impl<K, T> ClickGestures<K, T>
where
    K: Copy + Eq + Hash + Debug,
    T: GestureTimer<K>,
{
    pub fn new(timer: T, delay: Duration) -> Self {
        Self {
            states: HashMap::new(),
            timer,
            delay,
        }
    }

    pub fn state(&self, key: K) -> ClickState {
        self.states.get(&key).copied().unwrap_or_default()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Single click. Returns `false` when a click is already pending for `key`.
    pub fn click(&mut self, key: K) -> bool {
        if self.state(key) == ClickState::Pending {
            log::trace!("[Gesture] {:?}: click ignored, already pending", key);
            return false;
        }
        self.states.insert(key, ClickState::Pending);
        self.timer.start(key, self.delay);
        true
    }

    /// Timer ran out. Returns `true` when the pending click should take effect.
    ///
    /// Runs inside the timer callback, so the timer is not touched here.
    pub fn elapsed(&mut self, key: K) -> bool {
        match self.states.get_mut(&key) {
            Some(state) if *state == ClickState::Pending => {
                *state = ClickState::Idle;
                true
            }
            _ => {
                log::trace!("[Gesture] {:?}: stale timer", key);
                false
            }
        }
    }

    /// Double click. Disarms a pending click and returns whether one was pending.
    /// The caller handles the double click either way.
    pub fn double_click(&mut self, key: K) -> bool {
        if self.state(key) != ClickState::Pending {
            return false;
        }
        self.timer.cancel(key);
        self.states.insert(key, ClickState::Idle);
        log::trace!("[Gesture] {:?}: pending click cancelled by double click", key);
        true
    }

    /// Drop all state for a target that no longer exists
    pub fn forget(&mut self, key: K) {
        self.timer.cancel(key);
        self.states.remove(&key);
    }
}

/// Browser timer backed by `setTimeout`
pub struct TimeoutTimer<K> {
    handles: HashMap<K, Timeout>,
    on_elapsed: Rc<dyn Fn(K)>,
}

impl<K> TimeoutTimer<K> {
    /// `on_elapsed` is called with the key when its timeout fires.
    /// It should feed back into [`ClickGestures::elapsed`].
    pub fn new(on_elapsed: impl Fn(K) + 'static) -> Self {
        Self {
            handles: HashMap::new(),
            on_elapsed: Rc::new(on_elapsed),
        }
    }
}

impl<K> GestureTimer<K> for TimeoutTimer<K>
where
    K: Copy + Eq + Hash + 'static,
{
    fn start(&mut self, key: K, delay: Duration) {
        let on_elapsed = Rc::clone(&self.on_elapsed);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let handle = Timeout::new(millis, move || on_elapsed(key));
        // A handle already here has fired; dropping it is a no-op clearTimeout
        self.handles.insert(key, handle);
    }

    fn cancel(&mut self, key: K) {
        // Dropping a Timeout clears it
        self.handles.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTimer {
        started: Vec<(u32, Duration)>,
        cancelled: Vec<u32>,
    }

    impl GestureTimer<u32> for RecordingTimer {
        fn start(&mut self, key: u32, delay: Duration) {
            self.started.push((key, delay));
        }

        fn cancel(&mut self, key: u32) {
            self.cancelled.push(key);
        }
    }

    fn gestures() -> ClickGestures<u32, RecordingTimer> {
        ClickGestures::new(RecordingTimer::default(), DEFAULT_CLICK_DELAY)
    }

    #[test]
    fn test_single_click_resolves_once() {
        let mut g = gestures();
        assert!(g.click(1));
        assert_eq!(g.state(1), ClickState::Pending);
        assert_eq!(g.timer().started, vec![(1, DEFAULT_CLICK_DELAY)]);

        assert!(g.elapsed(1));
        assert_eq!(g.state(1), ClickState::Idle);
        // A second expiry for the same click does nothing
        assert!(!g.elapsed(1));
    }

    #[test]
    fn test_second_click_while_pending_is_ignored() {
        let mut g = gestures();
        assert!(g.click(1));
        assert!(!g.click(1));
        assert_eq!(g.timer().started.len(), 1);
    }

    #[test]
    fn test_double_click_cancels_pending() {
        let mut g = gestures();
        g.click(1);
        g.click(1);
        assert!(g.double_click(1));
        assert_eq!(g.state(1), ClickState::Idle);
        assert_eq!(g.timer().cancelled, vec![1]);
        // Timer firing anyway (already queued) must not count as a click
        assert!(!g.elapsed(1));
    }

    #[test]
    fn test_double_click_without_pending() {
        let mut g = gestures();
        assert!(!g.double_click(1));
        assert!(g.timer().cancelled.is_empty());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut g = gestures();
        g.click(1);
        g.click(2);
        g.double_click(1);
        assert_eq!(g.state(1), ClickState::Idle);
        assert_eq!(g.state(2), ClickState::Pending);
        assert!(g.elapsed(2));
    }

    #[test]
    fn test_forget_drops_pending() {
        let mut g = gestures();
        g.click(3);
        g.forget(3);
        assert_eq!(g.state(3), ClickState::Idle);
        assert_eq!(g.timer().cancelled, vec![3]);
        assert!(!g.elapsed(3));
    }
}
