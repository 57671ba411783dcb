use std::time::{Duration, Instant};

/// When a page load counts as finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Document load event only
    Load,
    /// Document load, then no new network resources for `idle`, bounded by
    /// `max_wait` measured from the start of the load.
    NetworkIdle { idle: Duration, max_wait: Duration },
}

impl WaitPolicy {
    pub fn network_idle(idle: Duration, max_wait: Duration) -> Self {
        Self::NetworkIdle { idle, max_wait }
    }
}

/// Tracks successive resource-count samples and reports when the count has
/// held steady for the idle window.
#[derive(Debug)]
pub struct IdleTracker {
    idle: Duration,
    last_count: Option<u64>,
    stable_since: Instant,
}

impl IdleTracker {
    pub fn new(idle: Duration, now: Instant) -> Self {
        Self {
            idle,
            last_count: None,
            stable_since: now,
        }
    }

    /// Record a sample. `None` means the document is still loading.
    /// Returns true once the same count has been seen for at least `idle`.
    pub fn observe(&mut self, count: Option<u64>, now: Instant) -> bool {
        match count {
            Some(count) if self.last_count == Some(count) => {
                now.saturating_duration_since(self.stable_since) >= self.idle
            }
            Some(count) => {
                self.last_count = Some(count);
                self.stable_since = now;
                self.idle.is_zero()
            }
            None => {
                self.last_count = None;
                self.stable_since = now;
                false
            }
        }
    }
}
