use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Teardown signal shared by every loop the engine drives.
///
/// Clones observe the same flag; once cancelled it stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Fresh, live token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal teardown. Returns `true` if this call performed it.
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::Relaxed)
    }

    /// Whether teardown has been signalled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
