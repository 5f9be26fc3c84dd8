//! Segmented search coordinator that runs one worker per segment.

use crate::error::Result;
use crate::search::config::Strategy;
use crate::search::parallel::config::ParallelConfig;
use crate::search::parallel::scoped::run_scoped;
use crate::search::parallel::slot::ResultSlot;
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::sequential::{SearchRange, search_range};
use crate::view::SortedView;
use std::time::Instant;
use tracing::{debug, trace};

/// What a segment worker did with its segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentOutcome {
    /// Target cannot lie in the segment; no search was run.
    Skipped,
    /// Segment was searched without a match.
    Missed,
    /// Segment held a match and offered it to the slot.
    Hit,
}

/// Split `[0, size)` into at most `segment_count` contiguous segments.
///
/// Segments hold at least one element each; the last one absorbs the
/// remainder of the integer division. Segment slots past the end of the
/// data are dropped, so the plan may be shorter than `segment_count`.
pub fn plan_segments(size: usize, segment_count: usize) -> Vec<SearchRange> {
    if size == 0 {
        return Vec::new();
    }

    let segment_count = segment_count.max(1);
    let segment_size = (size / segment_count).max(1);

    let mut segments: Vec<SearchRange> = (0..segment_count)
        .map(|i| i * segment_size)
        .take_while(|&start| start < size)
        .map(|start| SearchRange::new(start, (start + segment_size - 1).min(size - 1)))
        .collect();

    if let Some(last) = segments.last_mut() {
        last.end = size - 1;
    }

    segments
}

/// Run a segmented search and report statistics alongside the index.
///
/// Spawns one scoped thread per planned segment. Each worker compares the
/// target against its segment's bounds and only bisects the segment when
/// the target can lie inside it. A match is committed to a shared
/// [`ResultSlot`]; the first committed index wins. Every worker is joined
/// before returning. A panicking worker, or one the OS refuses to start,
/// turns the whole call into [`Error::WorkerFailure`](crate::Error::WorkerFailure).
pub fn run_segmented_search<T: Ord + Sync>(
    view: &SortedView<T>,
    target: &T,
    config: &ParallelConfig,
) -> Result<SearchResult> {
    let start_time = Instant::now();
    let mut statistics = SearchStatistics::new(Strategy::Segmented);

    let plan = plan_segments(view.len(), config.num_workers);
    if plan.is_empty() {
        statistics.elapsed_time = start_time.elapsed();
        return Ok(SearchResult::new(None, statistics));
    }

    debug!(
        size = view.len(),
        segments = plan.len(),
        "starting segmented search"
    );

    let slot = ResultSlot::new();
    let outcomes = run_scoped("segment", config.stack_size, &plan, |segment_id, segment| {
        run_segment_worker(segment_id, view, target, *segment, &slot)
    })?;

    statistics.workers_spawned = plan.len() as u64;
    statistics.segments_probed = outcomes.len() as u64;
    statistics.segments_searched = outcomes
        .iter()
        .filter(|outcome| **outcome != SegmentOutcome::Skipped)
        .count() as u64;
    statistics.elapsed_time = start_time.elapsed();

    Ok(SearchResult::new(slot.into_inner(), statistics))
}

/// Segment worker: bound test, then bisection, then commit.
fn run_segment_worker<T: Ord>(
    segment_id: usize,
    view: &SortedView<T>,
    target: &T,
    segment: SearchRange,
    slot: &ResultSlot,
) -> SegmentOutcome {
    // Only valid because each segment is a sorted slice of a sorted view
    if *target < view[segment.start] || view[segment.end] < *target {
        trace!(segment_id, %segment, "target outside segment bounds");
        return SegmentOutcome::Skipped;
    }

    match search_range(view, target, segment) {
        Some(index) => {
            let committed = slot.try_set(index);
            trace!(segment_id, index, committed, "segment hit");
            SegmentOutcome::Hit
        }
        None => SegmentOutcome::Missed,
    }
}

/// Search for `target` with `segment_count` concurrent segment workers.
pub fn segmented_search<T: Ord + Sync>(
    view: &SortedView<T>,
    target: &T,
    segment_count: usize,
) -> Result<Option<usize>> {
    let config = ParallelConfig::default().with_workers(segment_count);
    run_segmented_search(view, target, &config).map(|result| result.index)
}
