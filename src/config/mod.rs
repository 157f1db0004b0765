//! Configuration for the Snowflake generator

mod builder;
mod env;

use chrono::{DateTime, Utc};
use thiserror::Error;

pub use builder::SnowflakeConfigBuilder;
use builder::{DEFAULT_EPOCH_MS, DEFAULT_SEQUENCE_BITS, DEFAULT_WORKER_ID_BITS};
pub use env::{worker_id_from_env, worker_id_from_var, WORKER_ID_ENV};

/// Bits available to an ID; the sign bit is never used
pub const ID_BITS: u8 = 63;

/// Errors related to building a `SnowflakeConfig` or loading it from the environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeConfigError {
    /// Worker and sequence fields leave no room for the timestamp
    #[error("Worker ID bits {worker_id_bits} plus sequence bits {sequence_bits} must be below 63")]
    InvalidBitLayout { worker_id_bits: u8, sequence_bits: u8 },
    #[error("Environment variable {var} is not set")]
    MissingWorkerId { var: String },
    #[error("Environment variable {var} has non-integer value {value:?}")]
    MalformedWorkerId { var: String, value: String },
    #[error("Environment variable {var} could not be read: {reason}")]
    UnreadableEnvironment { var: String, reason: String },
}

/// `2^bits`, saturating at `i64::MAX` once the sign bit would be reached
#[inline(always)]
pub(crate) const fn pow2(bits: u8) -> i64 {
    if bits >= ID_BITS {
        i64::MAX
    } else {
        1i64 << bits
    }
}

/// All-ones value of width `bits`, capped at the 63 usable bits
#[inline(always)]
pub(crate) const fn mask(bits: u8) -> i64 {
    if bits >= ID_BITS {
        i64::MAX
    } else {
        (1i64 << bits) - 1
    }
}

/// Bit layout and epoch of a Snowflake ID
///
/// From high to low bits an ID holds the elapsed milliseconds since
/// [`epoch_ms`](Self::epoch_ms), the zero-based worker index and the
/// per-millisecond sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    worker_id_bits: u8,
    sequence_bits: u8,
    epoch_ms: i64,
}

impl SnowflakeConfig {
    /// Store a layout without checking it.
    ///
    /// A layout where `worker_id_bits + sequence_bits >= 63` silently produces
    /// overflowing IDs; use [`builder`](Self::builder) for a checked one.
    pub const fn new(worker_id_bits: u8, sequence_bits: u8, epoch_ms: i64) -> Self {
        Self {
            worker_id_bits,
            sequence_bits,
            epoch_ms,
        }
    }

    pub(crate) fn from_builder(b: SnowflakeConfigBuilder) -> Result<Self, SnowflakeConfigError> {
        let config = Self::new(b.worker_id_bits, b.sequence_bits, b.epoch_ms);
        config.validate()?;
        Ok(config)
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    /// Check that the timestamp field keeps at least one bit
    pub fn validate(&self) -> Result<(), SnowflakeConfigError> {
        if self.worker_id_bits as u16 + self.sequence_bits as u16 >= ID_BITS as u16 {
            return Err(SnowflakeConfigError::InvalidBitLayout {
                worker_id_bits: self.worker_id_bits,
                sequence_bits: self.sequence_bits,
            });
        }
        Ok(())
    }

    #[inline(always)]
    pub const fn worker_id_bits(&self) -> u8 {
        self.worker_id_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    #[inline(always)]
    pub const fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// Number of valid worker ids; they run from 1 to this value inclusive
    #[inline(always)]
    pub const fn max_worker_id(&self) -> i64 {
        pow2(self.worker_id_bits)
    }

    /// Number of IDs one worker can issue per millisecond
    #[inline(always)]
    pub const fn max_sequence(&self) -> i64 {
        pow2(self.sequence_bits)
    }

    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        ID_BITS
            .saturating_sub(self.worker_id_bits)
            .saturating_sub(self.sequence_bits)
    }

    /// Largest elapsed time the timestamp field holds without overflowing.
    ///
    /// With the default 41 timestamp bits this is about 69 years.
    #[inline(always)]
    pub const fn max_elapsed_ms(&self) -> i64 {
        mask(self.timestamp_bits())
    }

    /// End of the safe operational window, if it is representable
    pub fn exhausted_at(&self) -> Option<DateTime<Utc>> {
        let last_ms = self.epoch_ms.checked_add(self.max_elapsed_ms())?;
        DateTime::<Utc>::from_timestamp_millis(last_ms)
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> i64 {
        mask(self.sequence_bits)
    }

    #[inline(always)]
    pub(crate) const fn worker_mask(&self) -> i64 {
        mask(self.worker_id_bits)
    }

    #[inline(always)]
    pub(crate) const fn worker_shift(&self) -> u32 {
        self.sequence_bits as u32
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u32 {
        self.worker_id_bits as u32 + self.sequence_bits as u32
    }

    /// Pack the three fields into an ID. Out-of-window input wraps silently.
    #[inline(always)]
    pub(crate) const fn compose(&self, elapsed_ms: i64, worker_index: i64, sequence: i64) -> i64 {
        elapsed_ms.wrapping_shl(self.timestamp_shift())
            | worker_index.wrapping_shl(self.worker_shift())
            | sequence
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORKER_ID_BITS, DEFAULT_SEQUENCE_BITS, DEFAULT_EPOCH_MS)
    }
}
