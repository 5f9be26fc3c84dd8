//! Parallel linear search over data in any order.
//!
//! The slice is split into contiguous chunks, one per worker. Each worker
//! scans its chunk front to back and commits the first match it meets to a
//! shared [`ResultSlot`]. Workers stop scanning once any match has been
//! committed, so with several matches the reported index is whichever was
//! committed first.

use crate::error::Result;
use crate::search::config::Strategy;
use crate::search::parallel::scoped::run_scoped;
use crate::search::parallel::{ParallelConfig, ResultSlot, plan_segments};
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::sequential::SearchRange;
use std::time::Instant;
use tracing::{debug, trace};

/// Elements scanned between checks of the shared slot.
const STOP_CHECK_INTERVAL: usize = 1024;

/// Scan `values` for `target` with one worker per chunk.
///
/// `values` need not be sorted. An empty slice returns `None` without
/// spawning workers.
pub fn run_linear_search<T: PartialEq + Sync>(
    values: &[T],
    target: &T,
    config: &ParallelConfig,
) -> Result<SearchResult> {
    let start_time = Instant::now();
    let mut statistics = SearchStatistics::new(Strategy::Linear);

    let plan = plan_segments(values.len(), config.num_workers);
    if plan.is_empty() {
        statistics.elapsed_time = start_time.elapsed();
        return Ok(SearchResult::new(None, statistics));
    }

    debug!(size = values.len(), chunks = plan.len(), "starting linear search");

    let slot = ResultSlot::new();
    let scanned = run_scoped("linear", config.stack_size, &plan, |chunk_id, chunk| {
        scan_chunk(chunk_id, values, target, *chunk, &slot)
    })?;

    statistics.workers_spawned = plan.len() as u64;
    statistics.segments_probed = plan.len() as u64;
    statistics.segments_searched = scanned.iter().filter(|&&completed| completed).count() as u64;
    statistics.elapsed_time = start_time.elapsed();

    Ok(SearchResult::new(slot.into_inner(), statistics))
}

/// Scan one chunk. Returns `false` when the scan stopped early because
/// another worker had already committed a match.
fn scan_chunk<T: PartialEq>(
    chunk_id: usize,
    values: &[T],
    target: &T,
    chunk: SearchRange,
    slot: &ResultSlot,
) -> bool {
    for (offset, block) in values[chunk.start..=chunk.end]
        .chunks(STOP_CHECK_INTERVAL)
        .enumerate()
    {
        if slot.is_set() {
            trace!(chunk_id, "match already committed, stopping");
            return false;
        }

        if let Some(position) = block.iter().position(|value| value == target) {
            let index = chunk.start + offset * STOP_CHECK_INTERVAL + position;
            let committed = slot.try_set(index);
            trace!(chunk_id, index, committed, "chunk hit");
            return true;
        }
    }
    true
}

/// Search unsorted `values` for `target` with `worker_count` concurrent scanners.
pub fn linear_search<T: PartialEq + Sync>(
    values: &[T],
    target: &T,
    worker_count: usize,
) -> Result<Option<usize>> {
    let config = ParallelConfig::default().with_workers(worker_count);
    run_linear_search(values, target, &config).map(|result| result.index)
}
