//! Configuration for parallel search execution.

/// Default degree of parallelism for every parallel entry point.
pub const DEFAULT_WORKERS: usize = 4;

/// Configuration for parallel search execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of workers: pool size for multi-target dispatch, segment
    /// count for segmented search, pieces per round for narrowing search.
    pub num_workers: usize,
    /// Stack size for each worker thread (`None` uses the platform default)
    pub stack_size: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: DEFAULT_WORKERS,
            stack_size: None,
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel config with the specified number of workers.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the number of workers from an Option, keeping the current value on `None`.
    pub fn with_workers_option(self, num_workers: Option<usize>) -> Self {
        match num_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }

    /// Set the stack size of every worker thread.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    /// Number of pool threads needed for `jobs` independent jobs.
    pub fn pool_size(&self, jobs: usize) -> usize {
        self.num_workers.max(1).min(jobs)
    }
}
