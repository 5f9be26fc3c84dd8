//! Size-based policy choosing between sequential and segmented search.

use crate::error::Result;
use crate::search::config::Strategy;
use crate::search::parallel::{ParallelConfig, run_segmented_search};
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::sequential::sequential_search;
use crate::view::SortedView;
use std::time::Instant;
use tracing::debug;

/// Views at or below this size are searched on the calling thread.
pub const SMALL_THRESHOLD: usize = 100;

/// Run the adaptive policy and report which path was taken.
///
/// The returned statistics carry `Strategy::Sequential` when the small-input
/// path ran and `Strategy::Segmented` otherwise.
pub fn run_adaptive_search<T: Ord + Sync>(
    view: &SortedView<T>,
    target: &T,
    config: &ParallelConfig,
) -> Result<SearchResult> {
    if view.len() <= SMALL_THRESHOLD {
        debug!(size = view.len(), "small input, searching sequentially");
        let start_time = Instant::now();
        let index = sequential_search(view, target);
        let mut statistics = SearchStatistics::new(Strategy::Sequential);
        statistics.elapsed_time = start_time.elapsed();
        return Ok(SearchResult::new(index, statistics));
    }

    run_segmented_search(view, target, config)
}

/// Recommended entry point for a one-off single-target query.
pub fn adaptive_search<T: Ord + Sync>(
    view: &SortedView<T>,
    target: &T,
    worker_count: usize,
) -> Result<Option<usize>> {
    let config = ParallelConfig::default().with_workers(worker_count);
    run_adaptive_search(view, target, &config).map(|result| result.index)
}
