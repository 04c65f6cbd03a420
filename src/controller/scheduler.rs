use std::time::{Duration, Instant};

use crate::config::{MAX_REFRESH_SECS, MIN_REFRESH_SECS};

/// Auto-refresh timer driven by the render loop.
///
/// Holds no clock of its own: every call takes the caller's `now`.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    enabled: bool,
    interval: Duration,
    last_refresh: Instant,
}

impl RefreshScheduler {
    pub fn new(enabled: bool, interval_secs: u64, now: Instant) -> Self {
        Self {
            enabled,
            interval: Self::clamp_interval(interval_secs),
            last_refresh: now,
        }
    }

    fn clamp_interval(secs: u64) -> Duration {
        Duration::from_secs(secs.clamp(MIN_REFRESH_SECS, MAX_REFRESH_SECS))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval.as_secs()
    }

    pub fn set_interval_secs(&mut self, secs: u64) {
        self.interval = Self::clamp_interval(secs);
    }

    #[cfg(test)]
    pub fn last_refresh(&self) -> Instant {
        self.last_refresh
    }

    /// Returns true when a refresh is due, resetting the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        if now.saturating_duration_since(self.last_refresh) >= self.interval {
            self.last_refresh = now;
            return true;
        }
        false
    }

    /// Manual refresh restarts the countdown
    pub fn mark_refreshed(&mut self, now: Instant) {
        self.last_refresh = now;
    }

    /// Time left before `poll` fires; `None` while disabled
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        Some(self.interval.saturating_sub(now.saturating_duration_since(self.last_refresh)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_never_fires() {
        let start = Instant::now();
        let mut scheduler = RefreshScheduler::new(false, 5, start);

        for secs in [0, 5, 60, 3600] {
            assert!(!scheduler.poll(start + Duration::from_secs(secs)));
        }
        assert_eq!(scheduler.last_refresh(), start);
        assert_eq!(scheduler.time_until_due(start), None);
    }

    #[test]
    fn test_fires_at_interval_and_resets_once() {
        let start = Instant::now();
        let mut scheduler = RefreshScheduler::new(true, 5, start);

        assert!(!scheduler.poll(start + Duration::from_millis(4_999)));
        assert_eq!(scheduler.last_refresh(), start);

        let due = start + Duration::from_secs(5);
        assert!(scheduler.poll(due));
        assert_eq!(scheduler.last_refresh(), due);

        // same frame again: already reset
        assert!(!scheduler.poll(due));
        assert!(!scheduler.poll(due + Duration::from_secs(4)));
        assert!(scheduler.poll(due + Duration::from_secs(7)));
        assert_eq!(scheduler.last_refresh(), due + Duration::from_secs(7));
    }

    #[test]
    fn test_interval_is_clamped() {
        let now = Instant::now();
        let mut scheduler = RefreshScheduler::new(true, 0, now);
        assert_eq!(scheduler.interval_secs(), 1);

        scheduler.set_interval_secs(120);
        assert_eq!(scheduler.interval_secs(), 60);

        scheduler.set_interval_secs(15);
        assert_eq!(scheduler.interval_secs(), 15);
    }

    #[test]
    fn test_time_until_due_counts_down() {
        let start = Instant::now();
        let mut scheduler = RefreshScheduler::new(true, 10, start);

        assert_eq!(scheduler.time_until_due(start + Duration::from_secs(3)), Some(Duration::from_secs(7)));
        assert_eq!(scheduler.time_until_due(start + Duration::from_secs(30)), Some(Duration::ZERO));

        scheduler.mark_refreshed(start + Duration::from_secs(30));
        assert_eq!(scheduler.time_until_due(start + Duration::from_secs(30)), Some(Duration::from_secs(10)));
    }
}
