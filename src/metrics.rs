//! Lock-free worker counters and snapshot types.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters owned by one worker's shared state. Updated with relaxed
/// atomics; snapshots are advisory, not synchronization points.
#[derive(Debug, Default)]
pub(crate) struct LaneCounters {
    tasks_submitted: AtomicU64,
    tasks_completed: AtomicU64,
}

impl LaneCounters {
    pub fn record_submitted(&self) {
        self.tasks_submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_completed(&self) {
        self.tasks_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submitted(&self) -> u64 {
        self.tasks_submitted.load(Ordering::Relaxed)
    }

    pub fn completed(&self) -> u64 {
        self.tasks_completed.load(Ordering::Relaxed)
    }
}

/// Point-in-time counters for a single worker
#[derive(Debug, Clone)]
pub struct WorkerMetrics {
    /// Index of the worker within its pool
    pub index: usize,
    /// Tasks ever enqueued onto this worker
    pub tasks_submitted: u64,
    /// Tasks that have finished executing
    pub tasks_completed: u64,
    /// Tasks queued or in flight right now
    pub pending: usize,
}

/// Aggregated counters across a pool
#[derive(Debug, Clone, Default)]
pub struct PoolMetrics {
    /// Per-worker snapshots, in index order
    pub workers: Vec<WorkerMetrics>,
    /// Total tasks ever enqueued across the pool
    pub tasks_submitted: u64,
    /// Total tasks that have finished executing
    pub tasks_completed: u64,
}
