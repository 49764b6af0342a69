//! Dedicated worker threads with private FIFO task queues.
//!
//! Each [`Worker`] owns one OS thread and one queue. Callers decide
//! which worker a task lands on (there is no shared queue and no work
//! stealing) and can block until one worker, or the whole
//! [`WorkerPool`], has drained. Tasks on the same worker run strictly
//! in submission order; workers run independently of each other.

pub mod completion;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pool;
pub mod worker;

pub use completion::TaskHandle;
pub use config::PoolConfig;
pub use error::{PoolError, PoolResult};
pub use metrics::{PoolMetrics, WorkerMetrics};
pub use pool::WorkerPool;
pub use worker::Worker;
