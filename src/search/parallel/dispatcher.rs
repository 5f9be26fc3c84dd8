//! Multi-target dispatcher that runs independent searches on a worker pool.

use crate::error::{Error, Result};
use crate::search::parallel::channel::{
    DispatcherChannels, WorkerChannels, WorkerMessage, create_channels, panic_message,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::parallel::scoped::run_scoped;
use crate::search::sequential::sequential_search;
use crate::view::SortedView;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Mapping from each requested target to its index (`None` when absent).
pub type TargetResultMap<T> = HashMap<T, Option<usize>>;

/// Statistics from one multi-target dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchStatistics {
    /// Total time spent dispatching and waiting
    pub elapsed_time: Duration,
    /// Number of pool threads spawned
    pub workers_spawned: u64,
    /// Number of distinct targets scheduled
    pub jobs_scheduled: u64,
    /// Number of repeated targets folded into an existing job
    pub duplicate_targets: u64,
    /// Per-worker completed job counts, indexed by worker id
    pub jobs_per_worker: Vec<u64>,
}

/// Result from a multi-target dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSearchResult<T: Hash + Eq> {
    /// One entry per distinct target
    pub results: TargetResultMap<T>,
    /// Statistics from the dispatch
    pub statistics: DispatchStatistics,
}

/// Run one binary search per distinct target on a bounded worker pool.
///
/// Distinct targets are queued up front; `min(num_workers, targets)` scoped
/// threads drain the queue and report each result over a channel. No
/// worker shares mutable state with another. If any job fails, the stop
/// flag keeps siblings from taking new jobs, every thread is joined, and
/// the dispatch returns [`Error::WorkerFailure`] instead of a partial map.
pub fn run_multi_target_search<T>(
    view: &SortedView<T>,
    targets: &[T],
    config: &ParallelConfig,
) -> Result<MultiSearchResult<T>>
where
    T: Ord + Hash + Clone + Sync,
{
    let start_time = Instant::now();
    let mut statistics = DispatchStatistics::default();

    let mut seen = HashSet::with_capacity(targets.len());
    let jobs: Vec<&T> = targets.iter().filter(|t| seen.insert(*t)).collect();
    statistics.duplicate_targets = (targets.len() - jobs.len()) as u64;

    if jobs.is_empty() {
        statistics.elapsed_time = start_time.elapsed();
        return Ok(MultiSearchResult {
            results: TargetResultMap::new(),
            statistics,
        });
    }

    // Nothing to search: every target is absent and no worker is needed
    if view.is_empty() {
        statistics.elapsed_time = start_time.elapsed();
        return Ok(MultiSearchResult {
            results: jobs.into_iter().map(|target| (target.clone(), None)).collect(),
            statistics,
        });
    }

    let pool_size = config.pool_size(jobs.len());
    debug!(
        targets = jobs.len(),
        duplicates = statistics.duplicate_targets,
        pool_size,
        "dispatching multi-target search"
    );

    let (dispatcher, worker_channels) = create_channels::<&T>(pool_size, jobs.len());
    let DispatcherChannels {
        jobs: job_queue,
        from_workers,
        shared: _,
    } = dispatcher;

    // The queue holds every job, so sending never blocks
    for job in &jobs {
        job_queue
            .send(*job)
            .map_err(|_| Error::worker_failure(0, "job queue closed before dispatch"))?;
    }
    drop(job_queue);

    run_scoped("pool", config.stack_size, &worker_channels, |worker_id, channels| {
        run_pool_worker(worker_id, view, channels)
    })?;

    statistics.workers_spawned = pool_size as u64;
    statistics.jobs_scheduled = jobs.len() as u64;
    statistics.jobs_per_worker = vec![0; pool_size];

    let mut failure = None;
    let mut results = TargetResultMap::with_capacity(jobs.len());
    for message in from_workers.try_iter() {
        match message {
            WorkerMessage::Found { job, index, .. } => {
                results.insert(job.clone(), index);
            }
            WorkerMessage::Finished {
                worker_id,
                jobs_completed,
            } => {
                if let Some(count) = statistics.jobs_per_worker.get_mut(worker_id) {
                    *count = jobs_completed;
                }
            }
            WorkerMessage::Error { worker_id, message } => {
                failure.get_or_insert_with(|| Error::worker_failure(worker_id, message));
            }
        }
    }

    if let Some(err) = failure {
        warn!(%err, "multi-target search aborted");
        return Err(err);
    }

    statistics.elapsed_time = start_time.elapsed();
    Ok(MultiSearchResult {
        results,
        statistics,
    })
}

/// Pool worker: pull targets until the queue is drained or a stop is signalled.
fn run_pool_worker<T: Ord>(
    worker_id: usize,
    view: &SortedView<T>,
    channels: &WorkerChannels<&T>,
) {
    let mut jobs_completed = 0;

    for target in channels.jobs.iter() {
        if channels.shared.should_stop() {
            break;
        }

        match catch_unwind(AssertUnwindSafe(|| sequential_search(view, target))) {
            Ok(index) => {
                trace!(worker_id, ?index, "job finished");
                jobs_completed += 1;
                channels.report(WorkerMessage::Found {
                    worker_id,
                    job: target,
                    index,
                });
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(worker_id, %message, "pool worker failed");
                channels.shared.signal_stop();
                channels.report(WorkerMessage::Error { worker_id, message });
                break;
            }
        }
    }

    channels.report(WorkerMessage::Finished {
        worker_id,
        jobs_completed,
    });
}

/// Search for every target in `targets` using a pool of `worker_count` threads.
pub fn multi_target_search<T>(
    view: &SortedView<T>,
    targets: &[T],
    worker_count: usize,
) -> Result<TargetResultMap<T>>
where
    T: Ord + Hash + Clone + Sync,
{
    let config = ParallelConfig::default().with_workers(worker_count);
    run_multi_target_search(view, targets, &config).map(|result| result.results)
}
