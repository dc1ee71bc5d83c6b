#![deny(missing_docs)]
//! Shared logging utilities for the homework bot workspace.
//!
//! This crate provides the `bot_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line is tagged
//! with the current poll cycle so that a fetch failure and the send it
//! triggered can be matched in `output.log`.

use std::sync::atomic::{AtomicU64, Ordering};

#[doc(hidden)]
pub use log;

/// Poll cycle counter shared by the whole process.
static POLL_CYCLE: AtomicU64 = AtomicU64::new(0);

/// Sets the poll cycle number.
/// This should be called by the poll loop once per cycle.
pub fn set_cycle(cycle: u64) {
    POLL_CYCLE.store(cycle, Ordering::Relaxed);
}

/// Retrieves the poll cycle number.
/// Returns 0 before the first cycle starts.
pub fn current_cycle() -> u64 {
    POLL_CYCLE.load(Ordering::Relaxed)
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! bot_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[cycle {}] {}", $crate::current_cycle(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! bot_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[cycle {}] {}", $crate::current_cycle(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! bot_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[cycle {}] {}", $crate::current_cycle(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! bot_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[cycle {}] {}", $crate::current_cycle(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! bot_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[cycle {}] {}", $crate::current_cycle(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
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
