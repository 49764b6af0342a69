//! A dedicated worker thread with a private FIFO task queue.
//!
//! The queue is only ever popped by the worker's own thread; external
//! callers push onto it and may block on [`Worker::drain`] until it is
//! observed empty. A task counts as pending until its closure returns,
//! so `drain` waits out the in-flight task as well as the queue.

use std::collections::VecDeque;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::bounded;
use parking_lot::{Condvar, Mutex};

use crate::completion::TaskHandle;
use crate::config::PoolConfig;
use crate::error::{PoolError, PoolResult};
use crate::metrics::{LaneCounters, WorkerMetrics};

type Task = Box<dyn FnOnce() + Send + 'static>;

/// Queue state guarded by the lane mutex
struct LaneState {
    queue: VecDeque<Task>,
    /// A task has been popped and is executing outside the lock
    in_flight: bool,
    /// Set exactly once, under the lock, after the queue has drained
    shutdown: bool,
}

/// State shared between a worker's handle and its thread
struct Lane {
    state: Mutex<LaneState>,
    /// Wakes the thread on enqueue/shutdown and drain-waiters on empty
    signal: Condvar,
    counters: LaneCounters,
}

/// One dedicated thread executing tasks from a private FIFO queue.
///
/// Tasks enqueued from a single caller thread run in submission order.
/// Tasks on different workers run concurrently; the pool does nothing
/// to protect state shared across workers, so callers partition their
/// data (one exclusively owned output slot per worker is the intended
/// pattern).
pub struct Worker {
    lane: Arc<Lane>,
    index: usize,
    name: String,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Spawns the worker thread. It idles until work arrives.
    pub(crate) fn spawn(index: usize, config: &PoolConfig) -> PoolResult<Self> {
        let name = config.thread_name(index);
        let lane = Arc::new(Lane {
            state: Mutex::new(LaneState {
                queue: VecDeque::new(),
                in_flight: false,
                shutdown: false,
            }),
            signal: Condvar::new(),
            counters: LaneCounters::default(),
        });

        let mut builder = thread::Builder::new().name(name.clone());
        if let Some(stack_size) = config.stack_size {
            builder = builder.stack_size(stack_size);
        }

        let thread_lane = Arc::clone(&lane);
        let handle = builder
            .spawn(move || run_lane(thread_lane))
            .map_err(|source| PoolError::Spawn {
                name: name.clone(),
                source,
            })?;

        log::debug!("[Worker] spawned {}", name);

        Ok(Self {
            lane,
            index,
            name,
            handle: Some(handle),
        })
    }

    /// Index of this worker within its pool
    pub fn index(&self) -> usize {
        self.index
    }

    /// OS thread name of this worker
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends `task` to the tail of this worker's queue and wakes the
    /// thread. Never blocks the caller beyond brief lock contention.
    ///
    /// Enqueues from multiple caller threads interleave in lock
    /// acquisition order, which is unspecified.
    pub fn enqueue<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.push(Box::new(task));
    }

    /// Like [`enqueue`](Self::enqueue), but returns a handle that can
    /// wait for this one task to finish.
    pub fn enqueue_tracked<F>(&self, task: F) -> TaskHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let (done_tx, done_rx) = bounded(1);
        self.push(Box::new(move || {
            task();
            let _ = done_tx.send(());
        }));
        TaskHandle::new(done_rx)
    }

    fn push(&self, task: Task) {
        {
            let mut state = self.lane.state.lock();
            state.queue.push_back(task);
            self.lane.counters.record_submitted();
        }
        // notify_all: drain-waiters share the condvar with the thread
        self.lane.signal.notify_all();
    }

    /// Blocks until every task enqueued before this call has finished
    /// executing. Returns immediately if the worker is already idle.
    ///
    /// No quiescence guarantee: new tasks may land as soon as (or even
    /// while) this returns.
    pub fn drain(&self) {
        let mut state = self.lane.state.lock();
        while !state.queue.is_empty() || state.in_flight {
            self.lane.signal.wait(&mut state);
        }
    }

    /// Tasks enqueued but not yet finished (queued plus in-flight)
    pub fn pending(&self) -> usize {
        let state = self.lane.state.lock();
        state.queue.len() + state.in_flight as usize
    }

    /// Point-in-time counters for this worker
    pub fn metrics(&self) -> WorkerMetrics {
        WorkerMetrics {
            index: self.index,
            tasks_submitted: self.lane.counters.submitted(),
            tasks_completed: self.lane.counters.completed(),
            pending: self.pending(),
        }
    }
}

impl Drop for Worker {
    /// Lets queued and in-flight work finish, then stops and joins the
    /// thread. A task that never returns hangs the drop; there is no
    /// cancellation.
    fn drop(&mut self) {
        self.drain();
        {
            let mut state = self.lane.state.lock();
            state.shutdown = true;
        }
        self.lane.signal.notify_all();

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("[Worker] {} terminated by a panicking task", self.name);
            } else {
                log::debug!("[Worker] joined {}", self.name);
            }
        }
    }
}

fn run_lane(lane: Arc<Lane>) {
    loop {
        let task = {
            let mut state = lane.state.lock();
            loop {
                if let Some(task) = state.queue.pop_front() {
                    state.in_flight = true;
                    break task;
                }
                if state.shutdown {
                    return;
                }
                lane.signal.wait(&mut state);
            }
        };

        // Execute outside the lock; enqueue and drain only contend briefly
        task();

        let mut state = lane.state.lock();
        state.in_flight = false;
        lane.counters.record_completed();
        if state.queue.is_empty() {
            lane.signal.notify_all();
        }
    }
}
