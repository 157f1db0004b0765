//! Blocking waits for clock rollback and sequence exhaustion
//!
//! Both waits run while the generator's lock is held, so they stall every
//! other caller of the same generator until the clock catches up.

use crate::clock::Clock;

/// Pause between clock reads once a millisecond's sequence is exhausted
pub const EXHAUSTED_PAUSE_MS: u64 = 1;

/// Sleep until the clock reads at least `target`, returning that reading
///
/// Each round sleeps for the full remaining gap before reading again.
#[inline]
pub fn sleep_until_reached<C>(clock: &C, target: i64) -> i64
where
    C: Clock + ?Sized,
{
    loop {
        let now = clock.now_ms();
        if now >= target {
            return now;
        }
        clock.sleep_ms(target.abs_diff(now));
    }
}

/// Sleep in [`EXHAUSTED_PAUSE_MS`] steps until the clock is past `from`
#[inline]
pub fn sleep_until_past<C>(clock: &C, from: i64) -> i64
where
    C: Clock + ?Sized,
{
    loop {
        clock.sleep_ms(EXHAUSTED_PAUSE_MS);
        let now = clock.now_ms();
        if now > from {
            return now;
        }
    }
}
