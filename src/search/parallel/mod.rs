//! Parallel search execution over a shared sorted view.
//!
//! This module provides the concurrent search coordination layer: how work
//! is partitioned, how workers report results, and how results are
//! aggregated.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **coordinator** that splits the view into disjoint segments, runs one
//!   worker per segment and aggregates at most one match
//! - A **dispatcher** that runs one independent search per target on a
//!   bounded worker pool
//! - A **channel system** (job queue plus result channel) feeding the pool
//! - A **result slot** that records the first committed match without locks
//!
//! All workers are scoped threads: every call joins its workers before it
//! returns, and a panicking worker or a thread the OS refuses to create
//! surfaces as `Error::WorkerFailure`.
//!
//! # Example
//!
//! ```
//! use pbsearch::SortedView;
//! use pbsearch::search::parallel::{multi_target_search, segmented_search};
//!
//! let view = SortedView::new((0..20).step_by(2).collect::<Vec<i64>>()).unwrap();
//!
//! assert_eq!(segmented_search(&view, &10, 4).unwrap(), Some(5));
//!
//! let results = multi_target_search(&view, &[0, 18, 25], 4).unwrap();
//! assert_eq!(results[&18], Some(9));
//! assert_eq!(results[&25], None);
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod dispatcher;
pub(crate) mod scoped;
pub mod slot;

pub use config::{DEFAULT_WORKERS, ParallelConfig};
pub use coordinator::{plan_segments, run_segmented_search, segmented_search};
pub use dispatcher::{
    DispatchStatistics, MultiSearchResult, TargetResultMap, multi_target_search,
    run_multi_target_search,
};
pub use slot::ResultSlot;
