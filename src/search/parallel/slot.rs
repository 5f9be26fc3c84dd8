//! Set-once result cell shared by segment workers.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Marker for "no index recorded yet".
const UNSET: usize = usize::MAX;

/// Shared slot that records the first committed match for one query.
///
/// The slot moves from unset to set at most once. Later writers are no-ops,
/// so a concurrent winner's index is never overwritten.
#[derive(Debug)]
pub struct ResultSlot {
    index: AtomicUsize,
}

impl Default for ResultSlot {
    fn default() -> Self {
        Self {
            index: AtomicUsize::new(UNSET),
        }
    }
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to record `index`. Returns true if this call set the slot.
    pub fn try_set(&self, index: usize) -> bool {
        debug_assert_ne!(index, UNSET, "index collides with the unset marker");
        self.index
            .compare_exchange(UNSET, index, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// The recorded index, if any.
    pub fn get(&self) -> Option<usize> {
        match self.index.load(Ordering::Acquire) {
            UNSET => None,
            index => Some(index),
        }
    }

    pub fn is_set(&self) -> bool {
        self.get().is_some()
    }

    /// Consume the slot and return the recorded index.
    pub fn into_inner(self) -> Option<usize> {
        match self.index.into_inner() {
            UNSET => None,
            index => Some(index),
        }
    }
}
