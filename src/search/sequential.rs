//! Bounded sequential binary search.
//!
//! This is the primitive every concurrent strategy delegates to. It performs
//! no concurrency of its own.

use crate::view::SortedView;
use std::cmp::Ordering;

/// Inclusive `(start, end)` index pair into a [`SortedView`].
///
/// A range with `start > end` is empty; [`SearchRange::EMPTY`] is the
/// canonical empty range used for empty views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchRange {
    pub start: usize,
    pub end: usize,
}

impl SearchRange {
    pub const EMPTY: SearchRange = SearchRange { start: 1, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Range covering `[0, len)`, or [`SearchRange::EMPTY`] when `len == 0`.
    pub fn full(len: usize) -> Self {
        match len.checked_sub(1) {
            Some(end) => Self::new(0, end),
            None => Self::EMPTY,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of indices covered.
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

impl std::fmt::Display for SearchRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "[]")
        } else {
            write!(f, "[{}, {}]", self.start, self.end)
        }
    }
}

/// Binary search for `target` over the whole view.
pub fn sequential_search<T: Ord>(view: &SortedView<T>, target: &T) -> Option<usize> {
    search_range(view, target, view.full_range())
}

/// Binary search for `target` restricted to `range`.
///
/// Returns some index `i` in `range` with `view[i] == target`. With
/// duplicates, the index is whichever one the bisection lands on first.
/// The end of `range` is clipped to the view; an empty or out-of-bounds
/// range yields `None`.
pub fn search_range<T: Ord>(
    view: &SortedView<T>,
    target: &T,
    range: SearchRange,
) -> Option<usize> {
    let last = view.len().checked_sub(1)?;
    let mut low = range.start;
    let mut high = range.end.min(last);

    while low <= high {
        // Floor midpoint keeps the lower half on even-length ranges.
        let mid = low + (high - low) / 2;
        match view[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid.checked_sub(1)?,
        }
    }

    None
}
