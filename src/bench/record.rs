//! Per-size benchmark records with derived speedup and efficiency.

use std::time::Duration;

use serde::Serialize;

/// Outcome of one problem size: both timings plus the derived ratios.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRecord {
    /// Total iterations sampled in this round.
    pub total_iterations: u64,

    /// Tasks the budget was split into.
    pub num_tasks: u64,

    /// Wall-clock time of the sequential run.
    pub serial_elapsed: Duration,

    /// Wall-clock time of the pooled run.
    pub parallel_elapsed: Duration,

    /// Mean estimate from the sequential run.
    pub serial_estimate: f64,

    /// Mean estimate from the pooled run.
    pub parallel_estimate: f64,

    /// Serial over parallel elapsed time.
    pub speedup: f64,

    /// Speedup normalized by task count, as a percentage.
    pub efficiency: f64,

    /// Timestamp when the round finished.
    pub timestamp_ms: u64,
}

impl BenchmarkRecord {
    /// Derives speedup and efficiency from the measured timings.
    pub fn new(
        total_iterations: u64,
        num_tasks: u64,
        serial_elapsed: Duration,
        parallel_elapsed: Duration,
        serial_estimate: f64,
        parallel_estimate: f64,
    ) -> Self {
        let speedup = serial_elapsed.as_secs_f64() / parallel_elapsed.as_secs_f64();
        let efficiency = speedup / num_tasks as f64 * 100.0;

        Self {
            total_iterations,
            num_tasks,
            serial_elapsed,
            parallel_elapsed,
            serial_estimate,
            parallel_estimate,
            speedup,
            efficiency,
            timestamp_ms: current_time_ms(),
        }
    }

    /// Qualitative scaling label bucketed from efficiency.
    pub fn verdict(&self) -> &'static str {
        if self.efficiency >= 85.0 {
            "near-linear scaling"
        } else if self.efficiency >= 60.0 {
            "good scaling"
        } else if self.efficiency >= 40.0 {
            "fair scaling"
        } else {
            "poor scaling"
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Get current time in milliseconds
fn current_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
