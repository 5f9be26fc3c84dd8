//! Job queue and result channels for the search worker pool.

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Message sent from a pool worker to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage<J> {
    /// Worker finished one job.
    Found {
        worker_id: usize,
        job: J,
        index: Option<usize>,
    },
    /// Worker drained the queue (or was stopped) and is exiting.
    Finished { worker_id: usize, jobs_completed: u64 },
    /// Worker failed while running a job.
    Error { worker_id: usize, message: String },
}

/// Flags shared by every worker of one dispatch.
#[derive(Debug, Default)]
pub struct SharedState {
    should_stop: AtomicBool,
}

impl SharedState {
    /// Check if workers should stop taking jobs.
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::SeqCst)
    }

    /// Signal all workers to stop taking jobs.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::SeqCst);
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels<J> {
    /// Pull jobs from the shared queue.
    pub jobs: Receiver<J>,
    /// Send messages to the dispatcher.
    pub to_dispatcher: Sender<WorkerMessage<J>>,
    /// Shared stop flag.
    pub shared: Arc<SharedState>,
}

impl<J> WorkerChannels<J> {
    /// Send a message to the dispatcher.
    ///
    /// The dispatcher keeps its receiver until every worker has been joined,
    /// so a failed send means the dispatcher was torn down early.
    pub fn report(&self, message: WorkerMessage<J>) {
        let sent = self.to_dispatcher.send(message);
        debug_assert!(sent.is_ok(), "dispatcher dropped its receiver");
    }
}

/// Channel endpoints for the dispatcher.
pub struct DispatcherChannels<J> {
    /// Push jobs onto the shared queue.
    pub jobs: Sender<J>,
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage<J>>,
    /// Shared stop flag.
    pub shared: Arc<SharedState>,
}

/// Create the queue and result channels for `num_workers` pool workers.
///
/// The job queue is bounded to `capacity`, so a dispatcher that knows its
/// job count up front can enqueue everything without blocking.
pub fn create_channels<J>(
    num_workers: usize,
    capacity: usize,
) -> (DispatcherChannels<J>, Vec<WorkerChannels<J>>) {
    let shared = Arc::new(SharedState::default());

    let (job_tx, job_rx) = bounded(capacity.max(1));
    // Unbounded channel from workers to dispatcher (workers shouldn't block)
    let (worker_tx, dispatcher_rx) = unbounded();

    let workers = (0..num_workers)
        .map(|_| WorkerChannels {
            jobs: job_rx.clone(),
            to_dispatcher: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let dispatcher = DispatcherChannels {
        jobs: job_tx,
        from_workers: dispatcher_rx,
        shared,
    };

    (dispatcher, workers)
}

/// Render a thread panic payload as text.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked with a non-string payload".to_string()
    }
}
