//! Danger-edge detection
//!
//! Watches the sequence of danger flags produced by classification and
//! fires a one-shot navigation effect on each calm-to-danger
//! transition. Sustained danger does not re-fire; a return to calm
//! silently re-arms the trigger.

use crate::types::Page;

/// Edge-triggered reactor over successive classifications. Holds the
/// one piece of hidden state the mood engine has: the previous danger
/// flag.
#[derive(Debug, Default)]
pub struct AlertReactor {
    prev_danger: bool,
}

impl AlertReactor {
    pub fn new() -> Self {
        Self { prev_danger: false }
    }

    /// Observe one classification result.
    ///
    /// Returns the page to switch to when this observation is a
    /// calm-to-danger edge. Must be called exactly once per
    /// recomputation; every call records the observed flag for the
    /// next comparison, whether or not it fired.
    pub fn observe(&mut self, is_danger: bool) -> Option<Page> {
        let fired = is_danger && !self.prev_danger;
        self.prev_danger = is_danger;
        fired.then_some(Page::Map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_on_rising_edges() {
        let mut reactor = AlertReactor::new();
        let effects: Vec<bool> = [false, true, true, false, true]
            .into_iter()
            .map(|flag| reactor.observe(flag).is_some())
            .collect();
        assert_eq!(effects, vec![false, true, false, false, true]);
    }

    #[test]
    fn first_observation_can_fire() {
        let mut reactor = AlertReactor::new();
        assert_eq!(reactor.observe(true), Some(Page::Map));
    }

    #[test]
    fn sustained_danger_fires_once() {
        let mut reactor = AlertReactor::new();
        assert!(reactor.observe(true).is_some());
        assert!(reactor.observe(true).is_none());
        assert!(reactor.observe(true).is_none());
    }

    #[test]
    fn calm_never_fires() {
        let mut reactor = AlertReactor::new();
        for _ in 0..5 {
            assert!(reactor.observe(false).is_none());
        }
    }

    #[test]
    fn clearing_danger_rearms_without_firing() {
        let mut reactor = AlertReactor::new();
        assert!(reactor.observe(true).is_some());
        assert!(reactor.observe(false).is_none());
        assert!(reactor.observe(true).is_some());
    }
}
