//! Application wiring: configuration, pool startup, benchmark run.

use anyhow::{Context, Result};
use tracing::info;

use crate::bench::{self, report};
use crate::config::BenchConfig;
use crate::logger;
use crate::pool::WorkerPool;

/// Runs the full benchmark sequence. The worker pool lives for the whole
/// run and is joined when this function returns.
pub fn run() -> Result<()> {
    logger::init_logging();

    let config = BenchConfig::from_env().context("invalid environment configuration")?;
    let pool = WorkerPool::new(config.workers).context("failed to start worker pool")?;
    info!(
        workers = pool.size(),
        cpus = config.detected_cpus,
        "worker pool ready"
    );

    report::print_banner(&config);
    let records = bench::run_benchmarks(&pool, &config)?;
    report::print_summary(&records, config.format);

    Ok(())
}
