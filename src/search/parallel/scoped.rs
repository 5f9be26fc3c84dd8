//! Scoped worker threads with failure reporting.
//!
//! Every parallel entry point fans work out through [`run_scoped`]: one
//! named scoped thread per work item, all joined before returning. A thread
//! the OS refuses to create and a worker that panics both come back as
//! [`Error::WorkerFailure`] instead of unwinding into the caller.

use crate::error::{Error, Result};
use crate::search::parallel::channel::panic_message;
use std::thread;
use tracing::warn;

/// Stack size far beyond any user address space, so thread creation fails.
#[cfg(all(test, target_os = "linux", target_pointer_width = "64"))]
pub(crate) const UNSPAWNABLE_STACK: usize = 1 << 60;

/// Run `work(worker_id, item)` for every item on its own scoped thread.
///
/// Outputs come back in item order. Spawning stops at the first thread that
/// cannot be created; the workers already running are still joined. The
/// first failure (spawn error, then panics in worker order) is returned.
pub(crate) fn run_scoped<I, R, F>(
    label: &str,
    stack_size: Option<usize>,
    items: impl IntoIterator<Item = I>,
    work: F,
) -> Result<Vec<R>>
where
    I: Send,
    R: Send,
    F: Fn(usize, I) -> R + Sync,
{
    let work = &work;

    thread::scope(|scope| {
        let mut handles = Vec::new();
        let mut failure = None;

        for (worker_id, item) in items.into_iter().enumerate() {
            let mut builder = thread::Builder::new().name(format!("{}-{}", label, worker_id));
            if let Some(bytes) = stack_size {
                builder = builder.stack_size(bytes);
            }

            match builder.spawn_scoped(scope, move || work(worker_id, item)) {
                Ok(handle) => handles.push((worker_id, handle)),
                Err(err) => {
                    warn!(label, worker_id, %err, "failed to spawn worker");
                    failure = Some(Error::worker_failure(
                        worker_id,
                        format!("failed to spawn thread: {}", err),
                    ));
                    break;
                }
            }
        }

        let mut outputs = Vec::with_capacity(handles.len());
        for (worker_id, handle) in handles {
            match handle.join() {
                Ok(output) => outputs.push(output),
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    warn!(label, worker_id, %message, "worker failed");
                    failure.get_or_insert_with(|| Error::worker_failure(worker_id, message));
                }
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(outputs),
        }
    })
}
