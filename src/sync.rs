//! Synchronization primitives shared between the owning thread and
//! background engine queries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A thread-safe busy flag marking an outstanding engine query.
///
/// Only one holder can acquire it at a time; everything else is turned away
/// until it is released.
#[derive(Clone, Debug)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// Create a new busy flag (initially idle).
    #[must_use]
    pub fn new() -> Self {
        BusyFlag(Arc::new(AtomicBool::new(false)))
    }

    /// Mark busy. Returns `false` if the flag was already held.
    #[inline]
    #[must_use]
    pub fn try_acquire(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Mark idle again.
    #[inline]
    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }

    #[inline]
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for BusyFlag {
    fn default() -> Self {
        Self::new()
    }
}
