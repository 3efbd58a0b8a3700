//! Request-generation counter for discarding stale fetch responses.
//!
//! A view takes a ticket when it starts a fetch and applies the response only
//! if that ticket is still current. Unmounting invalidates every outstanding
//! ticket.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared, cloneable generation counter.
///
/// Atomic so it can be captured by Leptos cleanup callbacks, which must be
/// `Send + Sync`.
#[derive(Clone, Debug, Default)]
pub struct RequestGeneration(Arc<AtomicU64>);

impl RequestGeneration {
    /// Start a request; any earlier ticket becomes stale.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }

    /// Mark every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}
