//! Repeating one-second ticker
//!
//! The main loop is single-threaded and polls for input, so the ticker
//! is a schedule rather than a thread: the owner asks how many whole
//! periods have passed and receives each one exactly once. Cancelling
//! is dropping the handle.

use std::time::{Duration, Instant};

/// Tick cadence while a countdown is running
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Cancellable repeating timer handle
#[derive(Debug)]
pub struct Ticker {
    next_due: Instant,
}

impl Ticker {
    /// Arm a ticker whose first tick is due one period after `now`
    pub fn start(now: Instant) -> Self {
        Self {
            next_due: now + TICK_PERIOD,
        }
    }

    /// Number of ticks due at `now`. Each due tick is reported once.
    pub fn drain(&mut self, now: Instant) -> u32 {
        if now < self.next_due {
            return 0;
        }

        let behind = now.duration_since(self.next_due);
        let due = u32::try_from(behind.as_millis() / TICK_PERIOD.as_millis())
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        // A capped count leaves the schedule behind `now`; restart it instead
        self.next_due = self
            .next_due
            .checked_add(TICK_PERIOD * due)
            .filter(|next| *next > now)
            .unwrap_or(now + TICK_PERIOD);
        due
    }

    /// Time until the next tick is due
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_before_first_period() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(t0);
        assert_eq!(ticker.drain(t0), 0);
        assert_eq!(ticker.drain(t0 + Duration::from_millis(999)), 0);
    }

    #[test]
    fn test_each_tick_reported_once() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(t0);

        assert_eq!(ticker.drain(t0 + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.drain(t0 + Duration::from_millis(1500)), 0);
        assert_eq!(ticker.drain(t0 + Duration::from_millis(2000)), 1);
    }

    #[test]
    fn test_catches_up_after_stall() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(t0);

        assert_eq!(ticker.drain(t0 + Duration::from_millis(3500)), 3);
        assert_eq!(ticker.drain(t0 + Duration::from_millis(3900)), 0);
        assert_eq!(ticker.drain(t0 + Duration::from_millis(4000)), 1);
    }

    #[test]
    fn test_stall_past_u32_range_is_capped() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(t0);
        let later = t0 + Duration::from_secs(u64::from(u32::MAX) + 10);

        assert_eq!(ticker.drain(later), u32::MAX);
        assert_eq!(ticker.drain(later), 0);
        assert_eq!(ticker.until_next(later), TICK_PERIOD);
        assert_eq!(ticker.drain(later + TICK_PERIOD), 1);
    }

    #[test]
    fn test_until_next() {
        let t0 = Instant::now();
        let ticker = Ticker::start(t0);
        assert_eq!(ticker.until_next(t0), TICK_PERIOD);
        assert_eq!(
            ticker.until_next(t0 + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert_eq!(ticker.until_next(t0 + Duration::from_secs(5)), Duration::ZERO);
    }
}
