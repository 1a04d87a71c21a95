//! Trailing-edge debounce for the search query.
//!
//! The host only offers fire-and-forget timers (`set_timeout`), which cannot
//! be cancelled. Each keystroke therefore schedules its own timer and bumps
//! an outstanding counter; a timer firing decrements it, and only the timer
//! that brings it back to zero commits the pending value. Earlier timers in
//! the burst fall through as no-ops.

use std::time::Duration;

/// Default quiet period before a typed query is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    immediate: String,
    effective: String,
    pending: Option<String>,
    outstanding: usize,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchDebouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            immediate: String::new(),
            effective: String::new(),
            pending: None,
            outstanding: 0,
        }
    }

    /// Records a new immediate value.
    ///
    /// Returns the delay after which the caller must deliver
    /// [`on_timer`](Self::on_timer). Returns `None` when the delay is zero, in
    /// which case the value has already become effective.
    pub fn input(&mut self, value: impl Into<String>) -> Option<Duration> {
        self.immediate = value.into();
        if self.delay.is_zero() {
            self.pending = None;
            self.effective.clone_from(&self.immediate);
            return None;
        }
        self.pending = Some(self.immediate.clone());
        self.outstanding += 1;
        Some(self.delay)
    }

    /// Handles one scheduled timer firing.
    ///
    /// Returns the newly effective query when this was the last timer of the
    /// burst and a value is still pending.
    pub fn on_timer(&mut self) -> Option<String> {
        if self.outstanding == 0 {
            return None;
        }
        self.outstanding -= 1;
        if self.outstanding > 0 {
            return None;
        }
        let value = self.pending.take()?;
        self.effective.clone_from(&value);
        Some(value)
    }

    /// Drops any pending value. Timers that are still in flight fire as no-ops.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The value as typed, updated on every keystroke.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.immediate
    }

    /// The value the catalog is currently filtered by.
    #[must_use]
    pub fn effective(&self) -> &str {
        &self.effective
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_chars(debouncer: &mut SearchDebouncer, text: &str) -> usize {
        let mut query = debouncer.query().to_string();
        let mut scheduled = 0;
        for ch in text.chars() {
            query.push(ch);
            if debouncer.input(query.clone()).is_some() {
                scheduled += 1;
            }
        }
        scheduled
    }

    #[test]
    fn burst_commits_once_with_final_value() {
        let mut debouncer = SearchDebouncer::default();
        let scheduled = type_chars(&mut debouncer, "foodsafety");
        assert_eq!(scheduled, 10);
        assert_eq!(debouncer.effective(), "");

        let commits: Vec<String> = (0..scheduled).filter_map(|_| debouncer.on_timer()).collect();
        assert_eq!(commits, vec!["foodsafety".to_string()]);
        assert_eq!(debouncer.effective(), "foodsafety");
    }

    #[test]
    fn immediate_value_tracks_every_keystroke() {
        let mut debouncer = SearchDebouncer::default();
        debouncer.input("f");
        debouncer.input("fo");
        assert_eq!(debouncer.query(), "fo");
        assert_eq!(debouncer.effective(), "");
        assert!(debouncer.is_pending());
    }

    #[test]
    fn separate_bursts_commit_separately() {
        let mut debouncer = SearchDebouncer::default();
        debouncer.input("a");
        assert_eq!(debouncer.on_timer().as_deref(), Some("a"));
        debouncer.input("ab");
        assert_eq!(debouncer.on_timer().as_deref(), Some("ab"));
    }

    #[test]
    fn cancelled_timers_are_no_ops() {
        let mut debouncer = SearchDebouncer::default();
        debouncer.input("abc");
        debouncer.input("abcd");
        debouncer.cancel();
        assert!(debouncer.on_timer().is_none());
        assert!(debouncer.on_timer().is_none());
        assert_eq!(debouncer.effective(), "");
    }

    #[test]
    fn stray_timer_is_ignored() {
        let mut debouncer = SearchDebouncer::default();
        assert!(debouncer.on_timer().is_none());
    }

    #[test]
    fn zero_delay_commits_immediately() {
        let mut debouncer = SearchDebouncer::new(Duration::ZERO);
        assert!(debouncer.input("temp").is_none());
        assert_eq!(debouncer.effective(), "temp");
        assert!(debouncer.on_timer().is_none());
    }
}
