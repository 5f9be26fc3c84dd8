//! Parallel binary search over sorted sequences.
//!
//! A [`SortedView`] is validated once and then shared read-only by every
//! search. On top of the sequential bisection primitive sit the concurrent
//! strategies: segmented search (one worker per segment, first match wins),
//! multi-target dispatch on a bounded worker pool, the adaptive policy that
//! skips parallelism for small inputs, and a narrowing k-ary search. A
//! parallel linear scan covers data that is not sorted.
//!
//! ```
//! use pbsearch::{SortedView, adaptive_search, multi_target_search};
//!
//! let view = SortedView::new(vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19]).unwrap();
//! assert_eq!(adaptive_search(&view, &13, 4).unwrap(), Some(6));
//!
//! let found = multi_target_search(&view, &[5, 13, 20], 4).unwrap();
//! assert_eq!(found[&5], Some(2));
//! assert_eq!(found[&20], None);
//! ```
//!
//! The same scoped-worker machinery drives the parallel reductions in
//! [`reduce`] (min/max and an exclusive prefix sum) and the optional
//! parallel passes of the matrix sorter, [`Matrix`], whose
//! [`shearsort()`] wrapper stays sequential.

pub mod error;
pub mod reduce;
pub mod search;
pub mod shearsort;
pub mod view;

pub use error::{Error, Result};
pub use reduce::{min_max, prefix_sum};
pub use search::{
    SMALL_THRESHOLD, SearchConfig, SearchRange, SearchResult, SearchStatistics, Strategy,
    TargetResultMap, adaptive_search, linear_search, multi_target_search, narrowing_search,
    run_search, search_range, segmented_search, sequential_search,
};
pub use search::parallel::{DEFAULT_WORKERS, ParallelConfig};
pub use shearsort::{Matrix, shearsort, shearsort_parallel};
pub use view::{SortedView, is_sorted};
