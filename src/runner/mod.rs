//! Iteration partitioning and the serial/parallel runner pair.

mod parallel;
mod serial;

pub use parallel::run_parallel;
pub use serial::run_serial;

use thiserror::Error;

use crate::sampler::{Estimate, Task};

/// Seed base for serial tasks; task ids start at 1, so seeds do too.
pub const SERIAL_SEED_BASE: u64 = 0;

/// Seed base for parallel tasks, keeping the two stream families disjoint.
pub const PARALLEL_SEED_BASE: u64 = 1000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("cannot partition work across zero tasks")]
    ZeroTasks,
    #[error("{total} iterations across {num_tasks} tasks leaves every task empty")]
    EmptyTasks { total: u64, num_tasks: u64 },
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("a worker task failed before reporting its result")]
    WorkerLost,
}

/// Equal split of a total iteration budget across a fixed task count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    iterations_per_task: u64,
    num_tasks: u64,
}

impl Partition {
    /// Validates and splits the budget. The division truncates; a remainder
    /// is dropped rather than redistributed.
    pub fn new(total_iterations: u64, num_tasks: u64) -> Result<Self, PartitionError> {
        if num_tasks == 0 {
            return Err(PartitionError::ZeroTasks);
        }
        let iterations_per_task = total_iterations / num_tasks;
        if iterations_per_task == 0 {
            return Err(PartitionError::EmptyTasks {
                total: total_iterations,
                num_tasks,
            });
        }
        Ok(Self {
            iterations_per_task,
            num_tasks,
        })
    }

    pub fn iterations_per_task(self) -> u64 {
        self.iterations_per_task
    }

    pub fn num_tasks(self) -> u64 {
        self.num_tasks
    }

    /// Yields the partition's tasks with seeds `seed_base + task_id` for
    /// task ids `1..=num_tasks`.
    pub fn tasks(self, seed_base: u64) -> impl Iterator<Item = Task> {
        let iterations = self.iterations_per_task;
        (1..=self.num_tasks).map(move |task_id| Task {
            iterations,
            seed: seed_base + task_id,
        })
    }
}

/// Ordered per-task estimates plus their mean.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub estimates: Vec<Estimate>,
    pub mean: f64,
}

impl RunResult {
    fn from_estimates(estimates: Vec<Estimate>) -> Self {
        let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
        Self { estimates, mean }
    }
}
