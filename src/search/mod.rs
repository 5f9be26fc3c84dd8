//! Search strategies for locating targets in a sorted view
//!
//! This module provides several ways to run a binary search:
//! - Sequential: classic bisection on the calling thread
//! - Segmented: one worker per contiguous segment, first match wins
//! - Adaptive: sequential for small inputs, segmented otherwise
//! - Narrowing: parallel k-ary search that shrinks the live range per round
//! - Linear: parallel scan for unsorted data, first match wins
//! - Multi-target: independent searches for many targets on a worker pool

pub mod adaptive;
pub mod config;
pub mod linear;
pub mod narrowing;
pub mod parallel;
pub mod result;
pub mod sequential;

pub use adaptive::{SMALL_THRESHOLD, adaptive_search, run_adaptive_search};
pub use config::{SearchConfig, Strategy};
pub use linear::{linear_search, run_linear_search};
pub use narrowing::{narrowing_search, run_narrowing_search};
pub use parallel::{
    ParallelConfig, TargetResultMap, multi_target_search, run_multi_target_search,
    run_segmented_search, segmented_search,
};
pub use result::{SearchResult, SearchStatistics};
pub use sequential::{SearchRange, search_range, sequential_search};

use crate::error::Result;
use crate::view::SortedView;
use std::time::Instant;

/// Run a single-target search with the strategy selected in `config`.
pub fn run_search<T: Ord + Sync>(
    view: &SortedView<T>,
    target: &T,
    config: &SearchConfig,
) -> Result<SearchResult> {
    match config.strategy {
        Strategy::Sequential => {
            let start_time = Instant::now();
            let index = sequential_search(view, target);
            let mut statistics = SearchStatistics::new(Strategy::Sequential);
            statistics.elapsed_time = start_time.elapsed();
            Ok(SearchResult::new(index, statistics))
        }
        Strategy::Segmented => run_segmented_search(view, target, &config.parallel),
        Strategy::Adaptive => run_adaptive_search(view, target, &config.parallel),
        Strategy::Narrowing => run_narrowing_search(view, target, &config.parallel),
        Strategy::Linear => run_linear_search(view.as_slice(), target, &config.parallel),
    }
}
