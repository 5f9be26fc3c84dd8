//! Immutable, order-validated view over a sorted sequence.
//!
//! Every search in this crate reads from a [`SortedView`]. The order check
//! happens once at construction; afterwards the view is never mutated, so it
//! can be shared by any number of worker threads without locking.

use crate::error::{Error, Result};
use crate::search::sequential::SearchRange;
use std::ops::Deref;

/// Check whether a sequence is sorted in non-decreasing order.
///
/// Empty and single-element sequences are trivially sorted.
pub fn is_sorted<T: PartialOrd>(sequence: &[T]) -> bool {
    first_unsorted_position(sequence).is_none()
}

/// Index of the first element that is smaller than its predecessor.
fn first_unsorted_position<T: PartialOrd>(sequence: &[T]) -> Option<usize> {
    sequence
        .windows(2)
        .position(|pair| !(pair[0] <= pair[1]))
        .map(|i| i + 1)
}

/// A read-only sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedView<T> {
    elements: Vec<T>,
}

impl<T: Ord> SortedView<T> {
    /// Validate `elements` and wrap them in a view.
    ///
    /// Fails with [`Error::InvalidInput`] when the sequence is not
    /// non-decreasing. An empty sequence is accepted.
    pub fn new(elements: Vec<T>) -> Result<Self> {
        if let Some(position) = first_unsorted_position(&elements) {
            return Err(Error::invalid_input(position));
        }
        Ok(Self { elements })
    }
}

impl<T> SortedView<T> {
    /// Number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Range covering the whole view (empty when the view is empty).
    pub fn full_range(&self) -> SearchRange {
        SearchRange::full(self.len())
    }

    /// Give the elements back.
    pub fn into_inner(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Deref for SortedView<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> AsRef<[T]> for SortedView<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Ord> TryFrom<Vec<T>> for SortedView<T> {
    type Error = Error;

    fn try_from(elements: Vec<T>) -> Result<Self> {
        Self::new(elements)
    }
}
