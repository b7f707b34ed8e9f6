//! Cooperative cancellation.
//!
//! A [`CancelToken`] is a cloneable flag shared between the caller and a
//! running download. The download loop polls it at chunk boundaries only:
//! an in-flight chunk always completes, and a cancelled transfer stops
//! early leaving a well-formed partial destination suitable for a later
//! resume call. Cancellation is not an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation flag checked between chunk reads.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. All clones observe the signal.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation has been signaled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
