//! Start-up path of a relay instance: read the worker id, bind once, hand the
//! bound generator to the request handlers.
//!
//! Run with `SNOWFLAKE_WORKER_ID=3 RUST_LOG=debug cargo run --example relay_worker`.

use std::thread;

use relay_snowflake::{BoundGenerator, IdGenerator, SnowflakeExtractor};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let generator = IdGenerator::default();
    let worker = generator.bind_from_env()?;
    let extract = generator.extract();

    tracing::info!(
        worker_id = worker.worker_id(),
        window_ends = ?generator.config().exhausted_at(),
        "relay worker ready"
    );

    let handlers: Vec<_> = ["github", "telegram"]
        .into_iter()
        .map(|source| {
            let worker = worker.clone();
            thread::spawn(move || handle_updates(source, &worker))
        })
        .collect();

    for handler in handlers {
        for id in handler.join().expect("handler panicked") {
            print_id(id, &extract);
        }
    }

    Ok(())
}

fn handle_updates(source: &str, worker: &BoundGenerator) -> Vec<i64> {
    (0..3)
        .map(|_| {
            let id = worker.next_id();
            tracing::debug!(source, id, "accepted update");
            id
        })
        .collect()
}

fn print_id(id: i64, extract: &SnowflakeExtractor) {
    let (elapsed, worker_index, sequence) = extract.decompose(id);
    let issued = extract
        .datetime(id)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "out of range".into());

    println!(
        "  ID: {id}, Elapsed: {elapsed} ms, Issued: {issued}, Worker: {}, Sequence: {sequence}",
        worker_index + 1
    );
}
