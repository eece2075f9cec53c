//! Logging constants for the giveaway service.

/// Main log file name.
pub const LOG_FILE_NAME: &str = "giveaway.log";
/// Error log file name (warn+error).
pub const ERR_LOG_FILE_NAME: &str = "giveaway_err.log";

/// Console log pattern (colored).
///
/// Format: `timestamp [LEVEL] message [module]`
pub const LOG_LINE_PATTERN_COLORED: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{h({l:5})}] {m} [{M}]{n}";

/// File log pattern (no colors).
pub const LOG_LINE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l:5}] {m} [{M}]{n}";

/// Maximum log file size before rotation (20 MB).
pub const LOG_FILE_MAX_SIZE: u64 = 20_000_000;

/// Maximum number of archived log files.
pub const LOG_FILE_MAX_ROLLS: u32 = 7;

/// Our crates log at the requested app level; everything else is off unless `root=<level>` is set.
pub const WHITELISTED_CRATES: &[&str] = &["giveaway_core", "giveaway_service"];

/// Default filter expression when neither CLI nor env supplies one.
pub const DEFAULT_LOG_FILTERS: &str = "info,root=warn";
