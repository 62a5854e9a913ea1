//! Benchmark driver: one measured round per problem size.

pub mod record;
pub mod report;

pub use record::BenchmarkRecord;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::pool::WorkerPool;
use crate::runner::{self, Partition};

/// Runs the serial and parallel rounds for every configured problem size,
/// strictly in list order, printing each record as it completes.
///
/// Any failure aborts the remaining sizes; there is no retry.
pub fn run_benchmarks(pool: &WorkerPool, config: &BenchConfig) -> Result<Vec<BenchmarkRecord>> {
    let mut records = Vec::with_capacity(config.problem_sizes.len());

    for &total_iterations in &config.problem_sizes {
        let record = run_round(pool, config, total_iterations)
            .with_context(|| format!("benchmark round failed at {total_iterations} iterations"))?;
        report::print_record(&record, config.format);
        records.push(record);
    }

    Ok(records)
}

fn run_round(
    pool: &WorkerPool,
    config: &BenchConfig,
    total_iterations: u64,
) -> Result<BenchmarkRecord> {
    let partition = Partition::new(total_iterations, config.num_tasks)?;
    info!(
        total_iterations,
        num_tasks = config.num_tasks,
        "starting round"
    );

    let (serial, serial_elapsed) = timed(|| runner::run_serial(partition));
    debug!(
        elapsed_ms = serial_elapsed.as_secs_f64() * 1000.0,
        "serial half done"
    );

    let (parallel, parallel_elapsed) = timed(|| runner::run_parallel(pool, partition));
    let parallel = parallel?;
    debug!(
        elapsed_ms = parallel_elapsed.as_secs_f64() * 1000.0,
        "parallel half done"
    );

    Ok(BenchmarkRecord::new(
        total_iterations,
        config.num_tasks,
        serial_elapsed,
        parallel_elapsed,
        serial.mean,
        parallel.mean,
    ))
}

/// Measures the wall-clock time of a closure alongside its result.
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
