//! Loading indicator
//!
//! Tracks in-flight remote batches so the hosting UI can show a spinner
//! between dispatch and settlement. Nested starts are depth-counted; the
//! indicator stays active until every start has a matching stop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Shared loading indicator state
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    depth: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    /// Create a new LoadingIndicator instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a remote batch
    pub fn start(&self) {
        let depth = self.depth.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(depth = depth, "Loading started");
    }

    /// Mark the end of a remote batch
    pub fn stop(&self) {
        let previous = self.depth.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |d| {
            Some(d.saturating_sub(1))
        });
        if let Ok(depth) = previous {
            debug!(depth = depth.saturating_sub(1), "Loading stopped");
        }
    }

    /// Whether any batch is still in flight
    pub fn is_active(&self) -> bool {
        self.depth.load(Ordering::SeqCst) > 0
    }
}
