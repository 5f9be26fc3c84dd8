//! Parallel reductions over slices.
//!
//! Both operations reuse the segment planner and the scoped worker runner of
//! the search layer, so an empty input never spawns a thread and a failed
//! worker comes back as [`Error::WorkerFailure`](crate::Error::WorkerFailure).

use crate::error::Result;
use crate::search::parallel::scoped::run_scoped;
use crate::search::parallel::{ParallelConfig, plan_segments};
use std::ops::Add;
use tracing::debug;

/// Smallest and largest element of `values`, or `None` when it is empty.
///
/// Each worker reduces one contiguous segment; the partial results are
/// combined on the calling thread. With ties, any of the equal elements may
/// be returned.
pub fn run_min_max<'a, T: Ord + Sync>(
    values: &'a [T],
    config: &ParallelConfig,
) -> Result<Option<(&'a T, &'a T)>> {
    let plan = plan_segments(values.len(), config.num_workers);
    debug!(size = values.len(), segments = plan.len(), "parallel min/max");

    let partials = run_scoped("minmax", config.stack_size, &plan, |_, segment| {
        local_min_max(&values[segment.start..=segment.end])
    })?;

    Ok(partials
        .into_iter()
        .flatten()
        .reduce(|(lo, hi), (min, max)| (lo.min(min), hi.max(max))))
}

fn local_min_max<T: Ord>(segment: &[T]) -> Option<(&T, &T)> {
    let (first, rest) = segment.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), value| (lo.min(value), hi.max(value))),
    )
}

/// Min/max with `worker_count` segment workers.
pub fn min_max<T: Ord + Sync>(values: &[T], worker_count: usize) -> Result<Option<(&T, &T)>> {
    let config = ParallelConfig::default().with_workers(worker_count);
    run_min_max(values, &config)
}

/// Exclusive prefix sum (Blelloch scan).
///
/// Element `i` of the output is the sum of `values[..i]`, with
/// `T::default()` as the identity. The input is padded with the identity to
/// a power of two; an up-sweep builds partial sums in place, the root is
/// cleared, and a down-sweep distributes them. Every tree level runs its
/// disjoint node pairs on up to `num_workers` scoped threads.
pub fn run_prefix_sum<T>(values: &[T], config: &ParallelConfig) -> Result<Vec<T>>
where
    T: Copy + Default + Add<Output = T> + Send + Sync,
{
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let len = values.len();
    let padded = len.next_power_of_two();
    let mut tree = values.to_vec();
    tree.resize(padded, T::default());
    debug!(size = len, padded, "parallel prefix sum");

    let mut step = 2;
    while step <= padded {
        sweep_level(&mut tree, step, config, "upsweep", |node| {
            let (half, last) = (node.len() / 2 - 1, node.len() - 1);
            node[last] = node[last] + node[half];
        })?;
        step *= 2;
    }

    tree[padded - 1] = T::default();

    let mut step = padded;
    while step >= 2 {
        sweep_level(&mut tree, step, config, "downsweep", |node| {
            let (half, last) = (node.len() / 2 - 1, node.len() - 1);
            let left = node[half];
            node[half] = node[last];
            node[last] = node[last] + left;
        })?;
        step /= 2;
    }

    tree.truncate(len);
    Ok(tree)
}

/// Apply `op` to every `step`-wide node of `tree`, spreading nodes over workers.
fn sweep_level<T, F>(
    tree: &mut [T],
    step: usize,
    config: &ParallelConfig,
    label: &str,
    op: F,
) -> Result<()>
where
    T: Send,
    F: Fn(&mut [T]) + Sync,
{
    let nodes = tree.len() / step;
    let nodes_per_worker = nodes.div_ceil(config.pool_size(nodes));

    run_scoped(
        label,
        config.stack_size,
        tree.chunks_mut(nodes_per_worker * step),
        |_, block| block.chunks_exact_mut(step).for_each(&op),
    )?;
    Ok(())
}

/// Exclusive prefix sum with `worker_count` workers per tree level.
pub fn prefix_sum<T>(values: &[T], worker_count: usize) -> Result<Vec<T>>
where
    T: Copy + Default + Add<Output = T> + Send + Sync,
{
    let config = ParallelConfig::default().with_workers(worker_count);
    run_prefix_sum(values, &config)
}
