//! Logging setup for applications embedding tag sets.
//!
//! The library itself only emits `tracing` events; hosts that do not bring
//! their own subscriber can call [`init_logging`].

mod init;
pub use init::{init_logging, parse_level, parse_rotation};
use crate::utils::{get_tasktags_dir, LOGS_FOLDER};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename written inside the log directory.
pub const LOG_FILENAME: &str = "tasktags.log";
/// Configuration for the logging system.
pub struct LogConfig {
    /// Directory where log files will be written.
    pub log_dir: PathBuf,
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: Level,
    /// Whether to use JSON format for logs.
    pub json_format: bool,
    /// Log rotation period.
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        let log_dir = get_tasktags_dir()
            .unwrap_or_else(|| PathBuf::from(".").join(crate::utils::TASKTAGS_FOLDER))
            .join(LOGS_FOLDER);
        Self {
            log_dir,
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
