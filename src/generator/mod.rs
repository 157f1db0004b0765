//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last issued timestamp and sequence
//! - `wait` - Blocking waits for rollback and exhaustion
//! - `generate` - ID generation logic

mod generate;
mod state;
mod wait;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::{worker_id_from_env, SnowflakeConfig};
use crate::error::{SnowflakeError, WorkerIdBound};
use crate::extractor::SnowflakeExtractor;

use state::State;

struct Shared<C> {
    config: SnowflakeConfig,
    clock: C,
    state: Mutex<State>,
}

/// Process-wide ID factory.
///
/// Holds one bit layout, one clock and the single lock-guarded
/// `(last_timestamp_ms, sequence)` pair. Cloning yields another handle to the
/// same state; create it once at startup and hand clones to whoever needs IDs.
pub struct IdGenerator<C: Clock = SystemClock> {
    shared: Arc<Shared<C>>,
}

impl IdGenerator<SystemClock> {
    /// Create a generator on the system clock without checking the layout.
    ///
    /// A layout with `worker_id_bits + sequence_bits >= 63` is accepted and
    /// logged; IDs from it overflow silently.
    pub fn new(worker_id_bits: u8, sequence_bits: u8, epoch_ms: i64) -> Self {
        let config = SnowflakeConfig::new(worker_id_bits, sequence_bits, epoch_ms);
        if let Err(err) = config.validate() {
            warn!(%err, "unchecked Snowflake layout, generated IDs will overflow");
        }
        Self::with_config(config)
    }

    /// Create a generator on the system clock
    pub fn with_config(config: SnowflakeConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> IdGenerator<C> {
    /// Create a generator reading time from `clock`
    pub fn with_clock(config: SnowflakeConfig, clock: C) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                clock,
                state: Mutex::new(State::idle()),
            }),
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &SnowflakeConfig {
        &self.shared.config
    }

    pub fn worker_id_bits(&self) -> u8 {
        self.shared.config.worker_id_bits()
    }

    pub fn sequence_bits(&self) -> u8 {
        self.shared.config.sequence_bits()
    }

    pub fn epoch_ms(&self) -> i64 {
        self.shared.config.epoch_ms()
    }

    /// Number of valid worker ids, see [`SnowflakeConfig::max_worker_id`]
    pub fn max_worker_id(&self) -> i64 {
        self.shared.config.max_worker_id()
    }

    pub fn max_sequence(&self) -> i64 {
        self.shared.config.max_sequence()
    }

    /// Extractor for decomposing IDs produced by this generator
    pub fn extract(&self) -> SnowflakeExtractor {
        SnowflakeExtractor::new(self.shared.config)
    }

    /// Bind a worker id in `[1, max_worker_id]` to this generator
    pub fn bind(&self, worker_id: i64) -> Result<BoundGenerator<C>, SnowflakeError> {
        let max = self.max_worker_id();
        if worker_id > max {
            return Err(SnowflakeError::InvalidWorkerId {
                worker_id,
                bound: WorkerIdBound::ExceedsMaximum { max },
            });
        }
        if worker_id < 1 {
            return Err(SnowflakeError::InvalidWorkerId {
                worker_id,
                bound: WorkerIdBound::BelowMinimum,
            });
        }

        debug!(worker_id, "bound Snowflake worker");
        Ok(BoundGenerator {
            worker_index: worker_id - 1,
            generator: self.clone(),
        })
    }

    /// Bind the worker id configured in the environment
    pub fn bind_from_env(&self) -> Result<BoundGenerator<C>, SnowflakeError> {
        let worker_id = worker_id_from_env()?;
        self.bind(worker_id)
    }

    #[inline(always)]
    fn clock(&self) -> &C {
        &self.shared.clock
    }

    /// The state is written in one step at the end of `next_id`, so a
    /// poisoned lock still guards a consistent pair.
    #[inline(always)]
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for IdGenerator<SystemClock> {
    fn default() -> Self {
        Self::with_config(SnowflakeConfig::default())
    }
}

impl<C: Clock> Clone for IdGenerator<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C: Clock> fmt::Debug for IdGenerator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator")
            .field("config", &self.shared.config)
            .finish_non_exhaustive()
    }
}

/// An [`IdGenerator`] bound to one worker id
pub struct BoundGenerator<C: Clock = SystemClock> {
    worker_index: i64,
    generator: IdGenerator<C>,
}

impl<C: Clock> BoundGenerator<C> {
    /// One-based worker id as passed to [`IdGenerator::bind`]
    #[inline(always)]
    pub fn worker_id(&self) -> i64 {
        self.worker_index + 1
    }

    /// Zero-based worker id as stored in generated IDs
    #[inline(always)]
    pub fn worker_index(&self) -> i64 {
        self.worker_index
    }

    pub fn generator(&self) -> &IdGenerator<C> {
        &self.generator
    }
}

impl<C: Clock> Clone for BoundGenerator<C> {
    fn clone(&self) -> Self {
        Self {
            worker_index: self.worker_index,
            generator: self.generator.clone(),
        }
    }
}

impl<C: Clock> fmt::Debug for BoundGenerator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundGenerator")
            .field("worker_id", &self.worker_id())
            .field("generator", &self.generator)
            .finish()
    }
}
