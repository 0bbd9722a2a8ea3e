use std::sync::Arc;

use parking_lot::Mutex;

/// Counts in-flight operations that want a busy indicator.
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    count: Arc<Mutex<usize>>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self) {
        *self.count.lock() += 1;
    }

    /// Unbalanced calls stop at zero.
    pub fn hide(&self) {
        let mut count = self.count.lock();
        *count = count.saturating_sub(1);
    }

    pub fn reset(&self) {
        *self.count.lock() = 0;
    }

    pub fn is_loading(&self) -> bool {
        *self.count.lock() > 0
    }

    /// Shows now, hides when the guard drops.
    pub fn track(&self) -> LoadingGuard {
        self.show();
        LoadingGuard {
            tracker: self.clone(),
        }
    }
}

pub struct LoadingGuard {
    tracker: LoadingTracker,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tracker.hide();
    }
}
