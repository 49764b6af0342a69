//! Pool error handling.
//!
//! Spawning an OS thread is the only fallible operation in the crate;
//! everything after construction is infallible or blocks.

use std::io;

use thiserror::Error;

/// Type alias for pool operation results
pub type PoolResult<T> = Result<T, PoolError>;

#[derive(Debug, Error)]
pub enum PoolError {
    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker thread {name:?}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },
}
