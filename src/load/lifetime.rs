//! View lifetime token
//!
//! Ties an in-flight read to the view that asked for it. Once the view is
//! gone the token is cancelled and late results are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag shared between a view and its pending read
#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    cancelled: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the view as discarded
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let lifetime = ViewLifetime::new();
        let pending = lifetime.clone();
        assert!(!pending.is_cancelled());

        lifetime.cancel();
        assert!(pending.is_cancelled());
    }
}
