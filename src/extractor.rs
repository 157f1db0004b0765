use chrono::{DateTime, Utc};

use crate::config::SnowflakeConfig;

/// Snowflake ID component extractor
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    config: SnowflakeConfig,
}

impl SnowflakeExtractor {
    /// Create a new extractor for IDs with the given layout
    pub fn new(config: SnowflakeConfig) -> Self {
        Self { config }
    }

    /// Extract the elapsed milliseconds since the epoch
    #[inline(always)]
    pub fn timestamp(&self, id: i64) -> i64 {
        (id >> self.config.timestamp_shift()) & self.config.max_elapsed_ms()
    }

    /// Extract the zero-based worker index
    #[inline(always)]
    pub fn worker_index(&self, id: i64) -> i64 {
        (id >> self.config.worker_shift()) & self.config.worker_mask()
    }

    /// Extract the one-based worker id, as it was passed to `bind`
    #[inline(always)]
    pub fn worker_id(&self, id: i64) -> i64 {
        self.worker_index(id) + 1
    }

    /// Extract the sequence component
    #[inline(always)]
    pub fn sequence(&self, id: i64) -> i64 {
        id & self.config.sequence_mask()
    }

    /// Decompose an ID into elapsed milliseconds, worker index and sequence
    #[inline]
    pub fn decompose(&self, id: i64) -> (i64, i64, i64) {
        (self.timestamp(id), self.worker_index(id), self.sequence(id))
    }

    /// Milliseconds since the Unix epoch at which the ID was issued
    #[inline]
    pub fn unix_ms(&self, id: i64) -> i64 {
        self.timestamp(id) + self.config.epoch_ms()
    }

    pub fn datetime(&self, id: i64) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.unix_ms(id))
    }
}
