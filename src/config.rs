//! Pool construction parameters.

/// Configuration for a worker pool
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of workers to spawn
    pub workers: usize,
    /// Prefix for worker thread names
    pub thread_name_prefix: String,
    /// Stack size for worker threads (in bytes)
    pub stack_size: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        let cpu_count = num_cpus::get();

        Self {
            workers: cpu_count.saturating_sub(2).max(1), // Leave 2 cores for OS/main thread
            thread_name_prefix: "lane-worker".to_string(),
            stack_size: Some(2 * 1024 * 1024), // 2MB stack per thread
        }
    }
}

impl PoolConfig {
    /// Default configuration with an explicit worker count
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            ..Self::default()
        }
    }

    pub(crate) fn thread_name(&self, index: usize) -> String {
        format!("{}-{}", self.thread_name_prefix, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_at_least_one_worker() {
        let config = PoolConfig::default();
        assert!(config.workers >= 1);
    }

    #[test]
    fn thread_names_carry_prefix_and_index() {
        let config = PoolConfig::with_workers(2);
        assert_eq!(config.thread_name(3), "lane-worker-3");
    }
}
