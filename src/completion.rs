//! Per-task completion signaling.
//!
//! The core task model is fire-and-forget; this is the opt-in channel
//! for callers that need to observe one task's completion without
//! draining the whole worker.

use crossbeam_channel::Receiver;

/// Handle to one tracked task's completion.
///
/// Returned by [`Worker::enqueue_tracked`](crate::Worker::enqueue_tracked).
/// Dropping the handle is fine; the task still runs.
pub struct TaskHandle {
    done: Receiver<()>,
}

impl TaskHandle {
    pub(crate) fn new(done: Receiver<()>) -> Self {
        Self { done }
    }

    /// Blocks until the task has finished executing.
    ///
    /// Returns `false` if the task will never complete because its
    /// worker was torn down (e.g. by an earlier panicking task) before
    /// the task could run.
    pub fn wait(self) -> bool {
        self.done.recv().is_ok()
    }

    /// Non-blocking completion check
    pub fn is_complete(&self) -> bool {
        !self.done.is_empty()
    }
}
