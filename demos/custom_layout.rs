use chrono::{TimeZone, Utc};
use relay_snowflake::{IdGenerator, SnowflakeConfig};

fn main() {
    // Fewer workers, more IDs per millisecond, epoch at the start of 2025
    let config = SnowflakeConfig::builder()
        .worker_id_bits(6)
        .sequence_bits(16)
        .epoch_datetime(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
        .build()
        .unwrap();

    println!(
        "Layout: {} timestamp bits, {} workers, {} IDs/ms, safe until {:?}",
        config.timestamp_bits(),
        config.max_worker_id(),
        config.max_sequence(),
        config.exhausted_at()
    );

    let generator = IdGenerator::with_config(config);
    let worker = generator.bind(64).unwrap();
    let extract = generator.extract();

    for _ in 0..3 {
        let id = worker.next_id();
        let (elapsed, worker_index, sequence) = extract.decompose(id);
        println!("  ID: {id}, Elapsed: {elapsed} ms, Worker index: {worker_index}, Sequence: {sequence}");
    }

    // A layout that leaves no timestamp bits is refused
    let err = SnowflakeConfig::builder()
        .worker_id_bits(40)
        .sequence_bits(30)
        .build()
        .unwrap_err();
    println!("Rejected: {err}");
}
