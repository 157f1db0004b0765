use std::fmt;

use thiserror::Error;

use crate::config::SnowflakeConfigError;

/// Which end of the valid worker id range `[1, max_worker_id]` was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerIdBound {
    ExceedsMaximum { max: i64 },
    BelowMinimum,
}

impl fmt::Display for WorkerIdBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerIdBound::ExceedsMaximum { max } => write!(f, "exceeds maximum value {max}"),
            WorkerIdBound::BelowMinimum => write!(f, "below minimum value 1"),
        }
    }
}

/// Represents errors that can occur while setting up a Snowflake generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Worker id outside `[1, 2^worker_id_bits]`; not retryable
    #[error("Worker ID {worker_id} is invalid: {bound}")]
    InvalidWorkerId { worker_id: i64, bound: WorkerIdBound },
    #[error(transparent)]
    Config(#[from] SnowflakeConfigError),
}

impl SnowflakeError {
    pub fn is_invalid_worker_id(&self) -> bool {
        matches!(self, SnowflakeError::InvalidWorkerId { .. })
    }
}
