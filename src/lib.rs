//! Monte Carlo π benchmark comparing serial and task-parallel execution
//! over a fixed pool of worker threads.

pub mod app;
pub mod bench;
pub mod config;
pub mod logger;
pub mod pool;
pub mod runner;
pub mod sampler;
pub mod version;
