//! Fixed-size worker pool backed by OS threads.

use std::io;
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use thiserror::Error;
use tracing::debug;

type Job = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("worker pool requires at least one worker")]
    ZeroWorkers,
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

/// A fixed set of named worker threads draining one shared job queue.
///
/// The pool is created once at startup and passed by reference to whoever
/// dispatches work; it never grows, shrinks, or respawns a worker. Dropping
/// the pool closes the queue, lets the workers drain what is left, and joins
/// them.
pub struct WorkerPool {
    sender: Option<Sender<Job>>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(size: usize) -> Result<Self, PoolError> {
        if size == 0 {
            return Err(PoolError::ZeroWorkers);
        }

        let (sender, receiver) = unbounded::<Job>();
        let mut workers = Vec::with_capacity(size);
        for index in 0..size {
            let queue: Receiver<Job> = receiver.clone();
            let handle = thread::Builder::new()
                .name(format!("pibench-worker-{index}"))
                .spawn(move || {
                    while let Ok(job) = queue.recv() {
                        job();
                    }
                })?;
            workers.push(handle);
        }
        debug!(workers = size, "worker pool started");

        Ok(Self {
            sender: Some(sender),
            workers,
        })
    }

    /// Number of workers the pool was created with.
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Hands a job to the next idle worker.
    pub fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            let _ = sender.send(Box::new(job));
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the channel ends every worker loop once the queue drains.
        drop(self.sender.take());
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}
