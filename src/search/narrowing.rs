//! Parallel k-ary search that narrows the live range every round.
//!
//! Each round splits the live range into one piece per worker and probes the
//! pieces' endpoints concurrently. A worker whose endpoint equals the target
//! commits it to a [`ResultSlot`]; a worker whose endpoints strictly bracket
//! the target hands back the piece interior as the next live range. The
//! search ends on the first committed match, when no piece brackets the
//! target, or when the live range runs empty.

use crate::error::Result;
use crate::search::config::Strategy;
use crate::search::parallel::scoped::run_scoped;
use crate::search::parallel::{ParallelConfig, ResultSlot, plan_segments};
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::sequential::{SearchRange, search_range};
use crate::view::SortedView;
use std::time::Instant;
use tracing::{debug, trace};

/// What probing one piece's endpoints revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// An endpoint matched and was offered to the slot.
    Hit,
    /// The endpoints strictly bracket the target; carries the interior.
    Bracketed(SearchRange),
    /// The target cannot lie inside the piece.
    Outside,
}

pub fn run_narrowing_search<T: Ord + Sync>(
    view: &SortedView<T>,
    target: &T,
    config: &ParallelConfig,
) -> Result<SearchResult> {
    let start_time = Instant::now();
    let mut statistics = SearchStatistics::new(Strategy::Narrowing);
    let pieces = config.num_workers.max(1);

    // One piece per round only trims the two endpoints
    if pieces == 1 {
        let index = search_range(view, target, view.full_range());
        statistics.elapsed_time = start_time.elapsed();
        return Ok(SearchResult::new(index, statistics));
    }

    let slot = ResultSlot::new();
    let mut live = view.full_range();

    while !live.is_empty() {
        statistics.rounds += 1;
        let plan: Vec<SearchRange> = plan_segments(live.len(), pieces)
            .into_iter()
            .map(|piece| SearchRange::new(live.start + piece.start, live.start + piece.end))
            .collect();

        trace!(round = statistics.rounds, %live, pieces = plan.len(), "narrowing round");
        statistics.workers_spawned += plan.len() as u64;
        statistics.segments_probed += plan.len() as u64;

        let probes = run_scoped("narrowing", config.stack_size, &plan, |_, piece| {
            probe_piece(view, target, *piece, &slot)
        })?;
        if slot.is_set() {
            break;
        }

        match probes.into_iter().find_map(|probe| match probe {
            Probe::Bracketed(interior) => Some(interior),
            _ => None,
        }) {
            Some(interior) => live = interior,
            None => break,
        }
    }

    debug!(rounds = statistics.rounds, found = slot.is_set(), "narrowing search finished");
    statistics.elapsed_time = start_time.elapsed();
    Ok(SearchResult::new(slot.into_inner(), statistics))
}

fn probe_piece<T: Ord>(
    view: &SortedView<T>,
    target: &T,
    piece: SearchRange,
    slot: &ResultSlot,
) -> Probe {
    let first = &view[piece.start];
    let last = &view[piece.end];

    if first == target {
        slot.try_set(piece.start);
        Probe::Hit
    } else if last == target {
        slot.try_set(piece.end);
        Probe::Hit
    } else if first < target && target < last {
        // Strict bracketing implies piece.end > piece.start
        Probe::Bracketed(SearchRange::new(piece.start + 1, piece.end - 1))
    } else {
        Probe::Outside
    }
}

/// Search for `target` by narrowing with `worker_count` concurrent probes per round.
pub fn narrowing_search<T: Ord + Sync>(
    view: &SortedView<T>,
    target: &T,
    worker_count: usize,
) -> Result<Option<usize>> {
    let config = ParallelConfig::default().with_workers(worker_count);
    run_narrowing_search(view, target, &config).map(|result| result.index)
}
