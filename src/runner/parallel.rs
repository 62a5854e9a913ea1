//! Task-parallel execution of a partition over the worker pool.

use crossbeam_channel::{Receiver, unbounded};
use tracing::debug;

use super::{PARALLEL_SEED_BASE, Partition, RunResult, RunnerError};
use crate::pool::WorkerPool;
use crate::sampler::{self, Estimate};

/// Dispatches every task to the pool and blocks until all have reported.
///
/// Estimates land in task-submission order, so `estimates[i]` belongs to the
/// task seeded `PARALLEL_SEED_BASE + i + 1` regardless of which worker ran
/// it first. No partial result is ever returned: a task that dies before
/// sending disconnects the channel and fails the whole run.
pub fn run_parallel(pool: &WorkerPool, partition: Partition) -> Result<RunResult, RunnerError> {
    let num_tasks = partition.num_tasks() as usize;
    let (result_sender, result_receiver) = unbounded::<(usize, Estimate)>();

    for (index, task) in partition.tasks(PARALLEL_SEED_BASE).enumerate() {
        let sender = result_sender.clone();
        pool.execute(move || {
            let estimate = sampler::sample(task);
            let _ = sender.send((index, estimate));
        });
    }
    // Only task-held senders remain; the channel closes when they are gone.
    drop(result_sender);

    let estimates = collect(&result_receiver, num_tasks)?;
    Ok(RunResult::from_estimates(estimates))
}

/// Receives exactly `num_tasks` indexed estimates, slotting each by its
/// submission index. Disconnection before that means a task was lost.
fn collect(
    receiver: &Receiver<(usize, Estimate)>,
    num_tasks: usize,
) -> Result<Vec<Estimate>, RunnerError> {
    let mut estimates = vec![0.0_f64; num_tasks];
    for _ in 0..num_tasks {
        let (index, estimate) = receiver.recv().map_err(|_| RunnerError::WorkerLost)?;
        debug!(slot = index, estimate, "parallel task finished");
        estimates[index] = estimate;
    }
    Ok(estimates)
}
