//! Worker id from the process environment
//!
//! Each process is handed one worker id out of band. It is read from the
//! environment, with a `.env` file in the working directory consulted first.

use std::env::VarError;

use super::SnowflakeConfigError;

/// Environment variable holding this process's worker id
pub const WORKER_ID_ENV: &str = "SNOWFLAKE_WORKER_ID";

/// Read the worker id from [`WORKER_ID_ENV`]
pub fn worker_id_from_env() -> Result<i64, SnowflakeConfigError> {
    worker_id_from_var(WORKER_ID_ENV)
}

/// Read the worker id from the named variable.
///
/// Only the syntax is checked here; the range is checked when binding.
pub fn worker_id_from_var(var: &str) -> Result<i64, SnowflakeConfigError> {
    match dotenvy::var(var) {
        Ok(raw) => parse_worker_id(var, &raw),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => {
            Err(SnowflakeConfigError::MissingWorkerId { var: var.to_owned() })
        }
        Err(err) => Err(SnowflakeConfigError::UnreadableEnvironment {
            var: var.to_owned(),
            reason: err.to_string(),
        }),
    }
}

fn parse_worker_id(var: &str, raw: &str) -> Result<i64, SnowflakeConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| SnowflakeConfigError::MalformedWorkerId {
            var: var.to_owned(),
            value: raw.to_owned(),
        })
}
