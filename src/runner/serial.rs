//! Sequential execution of a partition on the calling thread.

use tracing::debug;

use super::{Partition, RunResult, SERIAL_SEED_BASE};
use crate::sampler;

/// Runs every task in task-id order, one after another. Never touches the
/// worker pool, so its timing is the single-thread baseline.
pub fn run_serial(partition: Partition) -> RunResult {
    let mut estimates = Vec::with_capacity(partition.num_tasks() as usize);
    for task in partition.tasks(SERIAL_SEED_BASE) {
        let estimate = sampler::sample(task);
        debug!(seed = task.seed, estimate, "serial task finished");
        estimates.push(estimate);
    }
    RunResult::from_estimates(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::Task;

    #[test]
    fn test_one_estimate_per_task() {
        let partition = Partition::new(40_000, 4).unwrap();
        let result = run_serial(partition);
        assert_eq!(result.estimates.len(), 4);
        assert!(result.estimates.iter().all(|e| (0.0..=4.0).contains(e)));
    }

    #[test]
    fn test_estimates_are_in_task_id_order() {
        let partition = Partition::new(30_000, 3).unwrap();
        let result = run_serial(partition);

        let expected: Vec<f64> = (1..=3)
            .map(|seed| {
                sampler::sample(Task {
                    iterations: 10_000,
                    seed,
                })
            })
            .collect();
        assert_eq!(result.estimates, expected);
    }
}
