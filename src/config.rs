//! Environment-derived benchmark settings.
//!
//! The binary takes no arguments; the only knobs are `PIBENCH_WORKERS` and
//! `PIBENCH_FORMAT`. Problem sizes and the task count are compiled in.

use std::env;

use thiserror::Error;

/// Problem sizes measured per run, strictly ascending.
pub const PROBLEM_SIZES: [u64; 3] = [10_000_000, 50_000_000, 100_000_000];

/// Tasks each problem size is split into.
pub const NUM_TASKS: u64 = 4;

/// Workers spawned when `PIBENCH_WORKERS` is unset.
pub const DEFAULT_WORKERS: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PIBENCH_WORKERS must be a positive integer, got '{0}'")]
    InvalidWorkers(String),
    #[error("PIBENCH_FORMAT must be 'text' or 'json', got '{0}'")]
    InvalidFormat(String),
}

/// Output mode for the report stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub workers: usize,
    pub num_tasks: u64,
    pub problem_sizes: Vec<u64>,
    pub format: ReportFormat,
    pub detected_cpus: usize,
}

impl BenchConfig {
    /// Reads `PIBENCH_WORKERS` and `PIBENCH_FORMAT`; a set-but-malformed
    /// value is fatal rather than silently falling back to a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let workers = parse_workers(env::var("PIBENCH_WORKERS").ok().as_deref())?;
        let format = parse_format(env::var("PIBENCH_FORMAT").ok().as_deref())?;

        Ok(Self {
            workers,
            num_tasks: NUM_TASKS,
            problem_sizes: PROBLEM_SIZES.to_vec(),
            format,
            detected_cpus: detected_parallelism(),
        })
    }
}

fn parse_workers(raw: Option<&str>) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(DEFAULT_WORKERS),
        Some(value) => match value.trim().parse::<usize>() {
            Ok(count) if count > 0 => Ok(count),
            _ => Err(ConfigError::InvalidWorkers(value.to_string())),
        },
    }
}

fn parse_format(raw: Option<&str>) -> Result<ReportFormat, ConfigError> {
    match raw {
        None => Ok(ReportFormat::Text),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidFormat(value.to_string())),
        },
    }
}

/// CPUs visible to the process. Display only; never overrides the setting.
fn detected_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_default_when_unset() {
        assert_eq!(parse_workers(None), Ok(DEFAULT_WORKERS));
    }

    #[test]
    fn test_workers_parse() {
        assert_eq!(parse_workers(Some("8")), Ok(8));
        assert_eq!(parse_workers(Some(" 2 ")), Ok(2));
    }

    #[test]
    fn test_workers_reject_zero_and_garbage() {
        assert!(matches!(
            parse_workers(Some("0")),
            Err(ConfigError::InvalidWorkers(_))
        ));
        assert!(matches!(
            parse_workers(Some("four")),
            Err(ConfigError::InvalidWorkers(_))
        ));
        assert!(matches!(
            parse_workers(Some("")),
            Err(ConfigError::InvalidWorkers(_))
        ));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(parse_format(None), Ok(ReportFormat::Text));
        assert_eq!(parse_format(Some("text")), Ok(ReportFormat::Text));
        assert_eq!(parse_format(Some("JSON")), Ok(ReportFormat::Json));
        assert!(matches!(
            parse_format(Some("xml")),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_problem_sizes_are_ascending() {
        assert!(PROBLEM_SIZES.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
