//! A sized collection of workers with bulk operations.

use std::ops::Index;

use crate::config::PoolConfig;
use crate::error::PoolResult;
use crate::metrics::PoolMetrics;
use crate::worker::Worker;

/// A fixed set of dedicated workers, indexed by the caller.
///
/// Placement is entirely caller-directed: there is no shared queue, no
/// load balancing and no work stealing. Callers pick a worker by index,
/// enqueue onto it, and drain it (or the whole pool) when they need the
/// backlog gone.
pub struct WorkerPool {
    workers: Vec<Worker>,
    config: PoolConfig,
}

impl WorkerPool {
    /// Spawns `config.workers` workers
    pub fn new(config: PoolConfig) -> PoolResult<Self> {
        let workers = config.workers;
        let mut pool = Self {
            workers: Vec::new(),
            config,
        };
        pool.resize(workers)?;
        Ok(pool)
    }

    /// Default configuration with an explicit worker count
    pub fn with_workers(workers: usize) -> PoolResult<Self> {
        Self::new(PoolConfig::with_workers(workers))
    }

    /// Replaces the current worker set with `n` fresh workers.
    ///
    /// Every existing worker is drained and joined before any new one
    /// is spawned, so this blocks for as long as the slowest old
    /// backlog takes to finish. `n = 0` leaves an empty pool.
    pub fn resize(&mut self, n: usize) -> PoolResult<()> {
        if !self.workers.is_empty() {
            log::debug!(
                "[WorkerPool] resizing from {} to {} workers",
                self.workers.len(),
                n
            );
        }
        self.workers.clear();

        let mut workers = Vec::with_capacity(n);
        for index in 0..n {
            workers.push(Worker::spawn(index, &self.config)?);
        }
        self.workers = workers;
        self.config.workers = n;
        Ok(())
    }

    /// Worker at `index`, if the pool is that large
    pub fn worker(&self, index: usize) -> Option<&Worker> {
        self.workers.get(index)
    }

    /// All current workers, in index order
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Number of workers currently in the pool
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Drains every worker in index order.
    ///
    /// Each worker is individually observed empty at some point during
    /// the call; a worker drained early may have accepted new work by
    /// the time the call returns.
    pub fn drain_all(&self) {
        for worker in &self.workers {
            worker.drain();
        }
    }

    /// Point-in-time counters for every worker plus pool totals
    pub fn metrics(&self) -> PoolMetrics {
        let workers: Vec<_> = self.workers.iter().map(Worker::metrics).collect();
        let tasks_submitted = workers.iter().map(|m| m.tasks_submitted).sum();
        let tasks_completed = workers.iter().map(|m| m.tasks_completed).sum();

        PoolMetrics {
            workers,
            tasks_submitted,
            tasks_completed,
        }
    }
}

impl Index<usize> for WorkerPool {
    type Output = Worker;

    fn index(&self, index: usize) -> &Worker {
        &self.workers[index]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn new_pool_has_configured_worker_count() {
        let pool = WorkerPool::with_workers(4).expect("failed to spawn pool");
        assert_eq!(pool.len(), 4);
        for (i, worker) in pool.workers().iter().enumerate() {
            assert_eq!(worker.index(), i);
        }
    }

    #[test]
    fn resize_replaces_workers() {
        let mut pool = WorkerPool::with_workers(2).expect("failed to spawn pool");

        pool.resize(5).expect("resize up failed");
        assert_eq!(pool.len(), 5);

        pool.resize(0).expect("resize to zero failed");
        assert!(pool.is_empty());

        pool.resize(1).expect("resize back up failed");
        assert_eq!(pool.len(), 1);

        // Fresh workers accept tasks immediately
        let counter = Arc::new(AtomicUsize::new(0));
        let n = Arc::clone(&counter);
        pool[0].enqueue(move || {
            n.fetch_add(1, Ordering::SeqCst);
        });
        pool.drain_all();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn indexing_matches_worker_accessor() {
        let pool = WorkerPool::with_workers(3).expect("failed to spawn pool");
        assert_eq!(pool[2].index(), 2);
        assert!(pool.worker(3).is_none());
    }

    #[test]
    fn metrics_aggregate_across_workers() {
        let pool = WorkerPool::with_workers(3).expect("failed to spawn pool");

        for (i, worker) in pool.workers().iter().enumerate() {
            for _ in 0..=i {
                worker.enqueue(|| {});
            }
        }
        pool.drain_all();

        let metrics = pool.metrics();
        assert_eq!(metrics.tasks_submitted, 6);
        assert_eq!(metrics.tasks_completed, 6);
        assert_eq!(metrics.workers.len(), 3);
        assert_eq!(metrics.workers[2].tasks_completed, 3);
    }

    #[test]
    fn drain_all_on_empty_pool_returns() {
        let pool = WorkerPool::with_workers(0).expect("failed to spawn pool");
        pool.drain_all();
        assert!(pool.is_empty());
    }
}
