//! Tagged structured logging for the advisor
//!
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-subsystem debug control via `--debug-<tag>` flags
//! - Colored console output, optionally mirrored to a plain-text file
//!
//! ## Usage
//!
//! ```rust
//! use volo_advisor::logger::{self, LogTag};
//!
//! logger::error(LogTag::Pools, "Navi pools request failed");
//! logger::info(LogTag::Rewards, "Fetched 3 rewards");
//! logger::debug(LogTag::Api, "Raw payload: ..."); // Only with --debug-api
//! logger::verbose(LogTag::Predictor, "Fit coefficients: ..."); // Only with --verbose
//! ```
//!
//! Call `logger::init()` once at startup, before anything logs.

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from command-line arguments and environment
///
/// Reads `--debug-<tag>`, `--debug-all`, `--verbose`, `--quiet` and
/// `--log-file <path>` (or `LOG_FILE`).
pub fn init() {
    config::init_from_args();

    let log_file = crate::arguments::get_arg_value("--log-file")
        .or_else(|| std::env::var("LOG_FILE").ok())
        .filter(|path| !path.trim().is_empty());

    if let Some(path) = log_file {
        if let Err(e) = file::init_file_logging(&path) {
            eprintln!("Failed to open log file {}: {}", path, e);
        }
    }
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (hidden only by --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the matching `--debug-<tag>` flag (or `--debug-all`) is set.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Flush the file mirror, if any
pub fn flush() {
    file::flush_file_logging();
}
