//! Touch debounce handling.
//!
//! Turns the raw, noisy touch level into discrete [`AdvanceEvent`]s. Two rules
//! apply together:
//!
//! - **Edge-triggered**: one continuous contact yields at most one event. The
//!   latch is set when an event fires and cleared the first tick the panel
//!   reads as released.
//! - **Rate-limited**: no event fires until strictly more than the cooldown has
//!   passed since the previous one. A contact that starts inside the cooldown
//!   and is still held when it expires fires at that point.
//!
//! Time is injected as milliseconds so the logic runs identically on the
//! firmware clock, the simulator clock, and in tests.

use crate::config::MODE_SWITCH_COOLDOWN_MS;

/// Request to move to the next display mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AdvanceEvent {
    /// Time the event fired, in milliseconds.
    pub at_ms: u64,
}

/// Debounce state for the touch sensor.
///
/// Before any event has fired there is no previous transition, so the
/// cooldown counts as already elapsed: a tap in the first second after boot
/// is accepted straight away rather than ignored as if a transition had
/// happened at time zero.
pub struct TouchDebouncer {
    press_latched: bool,
    last_transition_ms: Option<u64>,
    cooldown_ms: u64,
}

impl TouchDebouncer {
    /// Create a debouncer with the default mode-switch cooldown.
    pub const fn new() -> Self { Self::with_cooldown(MODE_SWITCH_COOLDOWN_MS) }

    /// Create a debouncer with a custom cooldown.
    pub const fn with_cooldown(cooldown_ms: u64) -> Self {
        Self {
            press_latched: false,
            last_transition_ms: None,
            cooldown_ms,
        }
    }

    /// Feed one raw sample. Returns an event on an accepted press edge.
    pub fn poll(
        &mut self,
        raw_touched: bool,
        now_ms: u64,
    ) -> Option<AdvanceEvent> {
        if !raw_touched {
            self.press_latched = false;
            return None;
        }

        if self.press_latched || !self.cooldown_elapsed(now_ms) {
            return None;
        }

        self.press_latched = true;
        self.last_transition_ms = Some(now_ms);
        Some(AdvanceEvent { at_ms: now_ms })
    }

    /// Whether a contact is currently latched.
    #[inline]
    pub const fn is_latched(&self) -> bool { self.press_latched }

    /// Time of the last accepted event.
    #[inline]
    pub const fn last_transition_ms(&self) -> Option<u64> { self.last_transition_ms }

    fn cooldown_elapsed(
        &self,
        now_ms: u64,
    ) -> bool {
        match self.last_transition_ms {
            Some(last) => now_ms.saturating_sub(last) > self.cooldown_ms,
            None => true,
        }
    }
}

impl Default for TouchDebouncer {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: u64 = 30;

    #[test]
    fn test_idle_never_fires() {
        let mut deb = TouchDebouncer::new();
        for i in 0..100 {
            assert_eq!(deb.poll(false, i * TICK), None);
        }
        assert!(!deb.is_latched());
    }

    #[test]
    fn test_first_touch_fires_immediately() {
        let mut deb = TouchDebouncer::new();
        assert_eq!(deb.poll(true, 5), Some(AdvanceEvent { at_ms: 5 }));
        assert!(deb.is_latched());
        assert_eq!(deb.last_transition_ms(), Some(5));
    }

    #[test]
    fn test_held_touch_fires_once() {
        let mut deb = TouchDebouncer::new();
        let events = (0..200).filter_map(|i| deb.poll(true, i * TICK)).count();
        assert_eq!(events, 1, "holding for 6s must not auto-repeat");
    }

    #[test]
    fn test_release_clears_latch_instantly() {
        let mut deb = TouchDebouncer::new();
        deb.poll(true, 0);
        deb.poll(false, 30);
        assert!(!deb.is_latched());
    }

    #[test]
    fn test_two_taps_inside_cooldown() {
        let mut deb = TouchDebouncer::new();
        assert!(deb.poll(true, 0).is_some());
        deb.poll(false, 100);
        assert!(deb.poll(true, 600).is_none());
        deb.poll(false, 700);
        assert!(deb.poll(true, 1000).is_none(), "exactly the cooldown is not enough");
    }

    #[test]
    fn test_two_taps_beyond_cooldown() {
        let mut deb = TouchDebouncer::new();
        assert!(deb.poll(true, 0).is_some());
        deb.poll(false, 100);
        assert_eq!(deb.poll(true, 1001), Some(AdvanceEvent { at_ms: 1001 }));
    }

    #[test]
    fn test_touch_held_through_cooldown_fires_on_expiry() {
        let mut deb = TouchDebouncer::new();
        assert!(deb.poll(true, 0).is_some());
        deb.poll(false, 30);

        // Second contact starts inside the cooldown and is held across its end.
        let fired: std::vec::Vec<u64> = (2..=40u64)
            .filter_map(|i| deb.poll(true, i * TICK))
            .map(|e| e.at_ms)
            .collect();
        assert_eq!(fired, [1020]);
    }

    #[test]
    fn test_custom_cooldown() {
        let mut deb = TouchDebouncer::with_cooldown(50);
        assert!(deb.poll(true, 0).is_some());
        deb.poll(false, 10);
        assert!(deb.poll(true, 60).is_some());
    }
}
