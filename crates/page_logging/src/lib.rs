#![deny(missing_docs)]
//! Shared logging utilities for the newsdesk workspace.
//!
//! This crate provides the `page_*` logging macros used across the codebase,
//! a thread-local page clock that stamps every entry with the virtual time of
//! the page event loop, and a minimal test initializer for the global logger.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Virtual milliseconds elapsed since the page was created.
    static PAGE_CLOCK_MS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the page clock for the current thread.
/// The page runtime calls this whenever its timer queue advances.
pub fn set_page_clock(now_ms: u64) {
    PAGE_CLOCK_MS.with(|v| v.set(now_ms));
}

/// Retrieves the page clock for the current thread.
/// Returns 0 if no runtime has advanced it yet.
pub fn page_clock() -> u64 {
    PAGE_CLOCK_MS.with(|v| v.get())
}

/// Logs a trace-level message stamped with the page clock.
#[macro_export]
macro_rules! page_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[t={}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message stamped with the page clock.
#[macro_export]
macro_rules! page_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[t={}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message stamped with the page clock.
#[macro_export]
macro_rules! page_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[t={}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message stamped with the page clock.
#[macro_export]
macro_rules! page_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[t={}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message stamped with the page clock.
#[macro_export]
macro_rules! page_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[t={}ms] {}", $crate::page_clock(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
