//! Shared test utilities for Snowflake tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::{BoundGenerator, Clock, IdGenerator, SnowflakeConfig};

/// 2024-01-01T00:00:00Z, the default epoch
pub const EPOCH_2024: i64 = 1704067200000;

/// A clock that only moves when told to.
///
/// By default `sleep_ms` really sleeps and leaves the time untouched, so a
/// blocked generator stays blocked until the test moves the clock. With
/// [`advancing_on_sleep`](Self::advancing_on_sleep) each sleep moves the
/// clock forward by the requested amount instead.
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
    advance_on_sleep: bool,
    sleeps: Mutex<Vec<u64>>,
}

impl ManualClock {
    pub fn new(now_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(now_ms),
            advance_on_sleep: false,
            sleeps: Mutex::new(Vec::new()),
        }
    }

    pub fn advancing_on_sleep(mut self) -> Self {
        self.advance_on_sleep = true;
        self
    }

    pub fn set(&self, now_ms: i64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    /// Every sleep requested so far, in milliseconds
    pub fn sleeps(&self) -> Vec<u64> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn sleep_ms(&self, ms: u64) {
        self.sleeps.lock().unwrap().push(ms);
        if self.advance_on_sleep {
            self.now.fetch_add(ms as i64, Ordering::SeqCst);
        } else {
            thread::sleep(Duration::from_millis(ms.min(5)));
        }
    }
}

/// A default-layout generator on a [`ManualClock`] frozen at `now_ms`
pub fn manual_generator(now_ms: i64) -> (Arc<ManualClock>, IdGenerator<Arc<ManualClock>>) {
    manual_generator_with(SnowflakeConfig::default(), ManualClock::new(now_ms))
}

pub fn manual_generator_with(
    config: SnowflakeConfig,
    clock: ManualClock,
) -> (Arc<ManualClock>, IdGenerator<Arc<ManualClock>>) {
    let clock = Arc::new(clock);
    let generator = IdGenerator::with_clock(config, Arc::clone(&clock));
    (clock, generator)
}

/// Run `next_id` on another thread; the receiver yields the ID once it returns
pub fn spawn_next_id<C>(worker: &BoundGenerator<C>) -> Receiver<i64>
where
    C: Clock + 'static,
{
    let worker = worker.clone();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(worker.next_id());
    });
    rx
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[i64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs strictly increase in the order given
pub fn assert_strictly_increasing(ids: &[i64]) {
    for i in 1..ids.len() {
        assert!(
            ids[i] > ids[i - 1],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i,
            ids[i],
            ids[i - 1]
        );
    }
}

/// Assert collection has expected unique count and is increasing once sorted
pub fn assert_unique_and_monotonic(mut ids: Vec<i64>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    ids.sort_unstable();
    assert_strictly_increasing(&ids);
}
