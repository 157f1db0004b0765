//! ID generation logic

use tracing::{debug, error, warn};

use crate::clock::Clock;

use super::wait::{sleep_until_past, sleep_until_reached};
use super::BoundGenerator;

impl<C: Clock> BoundGenerator<C> {
    /// Generate the next ID for this worker.
    ///
    /// IDs from one generator are unique and strictly increasing in call
    /// order. The call never fails but it can block:
    /// - when the clock moved backwards, until it is back at the last issued
    ///   millisecond;
    /// - when the millisecond's sequence is exhausted, until the next
    ///   millisecond (about 1ms).
    ///
    /// The wait happens while the generator's lock is held, so every other
    /// caller of the same [`IdGenerator`](super::IdGenerator) stalls with it.
    /// It is a blocking call, not a yield point: async code should run it on
    /// a blocking-capable thread.
    pub fn next_id(&self) -> i64 {
        let generator = &self.generator;
        let config = generator.config();
        let clock = generator.clock();
        let mut state = generator.lock_state();

        let mut now = clock.now_ms();

        if state.is_idle() {
            debug!(worker_id = self.worker_id(), "issuing first ID");
        } else if now < state.last_timestamp_ms {
            warn!(
                worker_id = self.worker_id(),
                behind_ms = state.last_timestamp_ms - now,
                "clock moved backwards, waiting for it to catch up"
            );
            now = sleep_until_reached(clock, state.last_timestamp_ms);
        }

        if now == state.last_timestamp_ms {
            if state.advance_sequence(config.sequence_mask()) {
                debug!(
                    worker_id = self.worker_id(),
                    timestamp_ms = now,
                    "sequence exhausted, waiting for next millisecond"
                );
                now = sleep_until_past(clock, state.last_timestamp_ms);
            }
        } else {
            state.sequence = 0;
        }

        state.last_timestamp_ms = now;

        let elapsed = now - config.epoch_ms();
        if !(0..=config.max_elapsed_ms()).contains(&elapsed) {
            error!(
                elapsed_ms = elapsed,
                max_elapsed_ms = config.max_elapsed_ms(),
                "clock is outside the layout's timestamp window, ID will overflow"
            );
        }

        config.compose(elapsed, self.worker_index, state.sequence)
    }
}
