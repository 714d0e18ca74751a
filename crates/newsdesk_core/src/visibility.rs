use crate::{Rect, Viewport};

/// True only when the whole rectangle lies inside the viewport.
/// Partially visible slots do not count.
pub fn is_fully_visible(rect: &Rect, viewport: &Viewport) -> bool {
    rect.top >= 0.0
        && rect.left >= 0.0
        && rect.bottom <= viewport.height
        && rect.right <= viewport.width
}

/// Coalesces scroll bursts into at most one pending visibility scan.
/// - The first scroll schedules a scan.
/// - Scrolls while a scan is pending are dropped, not queued.
/// - State clears only when the scheduled scan actually runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollThrottle {
    pending: bool,
}

impl ScrollThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller should schedule a scan.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Record that the scheduled scan has run.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
