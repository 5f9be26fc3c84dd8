//! Configuration types for single-target search strategies

use crate::search::parallel::ParallelConfig;

/// Single-target search strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Plain binary search on the calling thread
    Sequential,
    /// One worker per contiguous segment, first match wins
    Segmented,
    /// Sequential below the small-input threshold, segmented above it
    #[default]
    Adaptive,
    /// Parallel k-ary search that narrows the live range each round
    Narrowing,
    /// Parallel scan that ignores the ordering
    Linear,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::Segmented => write!(f, "segmented"),
            Strategy::Adaptive => write!(f, "adaptive"),
            Strategy::Narrowing => write!(f, "narrowing"),
            Strategy::Linear => write!(f, "linear"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" | "binary" => Ok(Strategy::Sequential),
            "segmented" | "seg" => Ok(Strategy::Segmented),
            "adaptive" | "auto" => Ok(Strategy::Adaptive),
            "narrowing" | "kary" | "k-ary" => Ok(Strategy::Narrowing),
            "linear" | "scan" => Ok(Strategy::Linear),
            _ => Err(format!(
                "Unknown strategy: '{}'. \
                 Valid options: sequential, segmented, adaptive, narrowing, linear",
                s
            )),
        }
    }
}

/// Main search configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Strategy used for single-target queries
    pub strategy: Strategy,
    /// Degree of parallelism for the parallel strategies
    pub parallel: ParallelConfig,
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.parallel = self.parallel.with_workers(num_workers);
        self
    }
}
