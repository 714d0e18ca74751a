pub const AD_LOAD_DELAY_MS: u64 = 1500;
pub const LOAD_MORE_DELAY_MS: u64 = 1000;
pub const SCROLL_THROTTLE_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    /// Renders the size as a `window.open` feature string.
    pub fn features(&self) -> String {
        format!("width={},height={}", self.width, self.height)
    }
}

/// Timings and sizes used by the page handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub ad_load_delay_ms: u64,
    pub load_more_delay_ms: u64,
    pub scroll_throttle_ms: u64,
    pub share_window: WindowSize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ad_load_delay_ms: AD_LOAD_DELAY_MS,
            load_more_delay_ms: LOAD_MORE_DELAY_MS,
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            share_window: WindowSize {
                width: 600,
                height: 400,
            },
        }
    }
}
