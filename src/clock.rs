//! Time sources for Snowflake generation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use std::thread;
use std::time::Duration;

use chrono::Utc;

/// Source of wall-clock milliseconds and of blocking waits.
///
/// The generator reads the clock and sleeps only through this trait, which
/// lets tests drive time by hand.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;

    /// Block the calling thread for `ms` milliseconds
    fn sleep_ms(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    #[inline(always)]
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }

    fn sleep_ms(&self, ms: u64) {
        (**self).sleep_ms(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_is_reasonable() {
        let now = SystemClock.now_ms();
        // Should be after 2024-01-01
        assert!(now > 1704067200000);
        // Should be before 2100-01-01
        assert!(now < 4102444800000);
    }

    #[test]
    fn test_system_clock_sleeps() {
        let before = SystemClock.now_ms();
        SystemClock.sleep_ms(2);
        assert!(SystemClock.now_ms() >= before + 1);
    }
}
