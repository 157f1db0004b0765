//! # relay-snowflake
//!
//! Snowflake-style ID generator used by the webhook relay service.
//!
//! IDs are 63-bit positive integers, high to low:
//! - elapsed milliseconds since a custom epoch (41 bits by default)
//! - zero-based worker index (10 bits by default)
//! - per-millisecond sequence (12 bits by default)
//!
//! ```
//! use relay_snowflake::IdGenerator;
//!
//! let generator = IdGenerator::default();
//! let worker = generator.bind(1).unwrap();
//!
//! let a = worker.next_id();
//! let b = worker.next_id();
//! assert!(b > a);
//! assert_eq!(generator.extract().worker_id(a), 1);
//! ```

#![forbid(unsafe_code)]

pub mod clock;
mod config;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use config::{
    worker_id_from_env, worker_id_from_var, SnowflakeConfig, SnowflakeConfigBuilder,
    SnowflakeConfigError, WORKER_ID_ENV,
};
pub use error::{SnowflakeError, WorkerIdBound};
pub use extractor::SnowflakeExtractor;
pub use generator::{BoundGenerator, IdGenerator};
