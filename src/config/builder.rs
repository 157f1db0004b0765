//! SnowflakeConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::{SnowflakeConfig, SnowflakeConfigError};

/// Default configuration values
pub(super) const DEFAULT_WORKER_ID_BITS: u8 = 10;
pub(super) const DEFAULT_SEQUENCE_BITS: u8 = 12;
pub(super) const DEFAULT_EPOCH_MS: i64 = 1704067200000; // January 1, 2024 UTC

/// Builder for SnowflakeConfig
#[derive(Debug, Clone, Copy)]
pub struct SnowflakeConfigBuilder {
    pub(super) worker_id_bits: u8,
    pub(super) sequence_bits: u8,
    pub(super) epoch_ms: i64,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            worker_id_bits: DEFAULT_WORKER_ID_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            epoch_ms: DEFAULT_EPOCH_MS,
        }
    }

    /// Set the number of bits for the worker id (`2^bits` workers)
    pub const fn worker_id_bits(mut self, bits: u8) -> Self {
        self.worker_id_bits = bits;
        self
    }

    /// Set the number of bits for the sequence (`2^bits` IDs per millisecond)
    pub const fn sequence_bits(mut self, bits: u8) -> Self {
        self.sequence_bits = bits;
        self
    }

    /// Set a custom epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch_ms: i64) -> Self {
        self.epoch_ms = epoch_ms;
        self
    }

    pub fn epoch_datetime(self, epoch: DateTime<Utc>) -> Self {
        self.epoch(epoch.timestamp_millis())
    }

    /// Build the final SnowflakeConfig
    ///
    /// Fails when the worker and sequence fields leave no timestamp bits.
    pub fn build(self) -> Result<SnowflakeConfig, SnowflakeConfigError> {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
