//! Diagnostic logging to stderr.
//!
//! The library only emits through the `log` facade; the binary decides
//! whether anything is printed. `RUST_LOG` wins over the configured level.

use crate::errors::{AppError, AppResult};
use flexi_logger::{Logger, LoggerHandle};

const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

fn normalize_level(level: &str) -> AppResult<String> {
    let level = level.trim().to_ascii_lowercase();
    if LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(AppError::Config(format!(
            "unsupported log level `{}` (expected one of {})",
            level,
            LEVELS.join(", ")
        )))
    }
}

/// Start the stderr logger. Keep the handle alive for the whole run.
pub fn init_logging(level: &str) -> AppResult<LoggerHandle> {
    let level = normalize_level(level)?;
    Logger::try_with_env_or_str(&level)
        .map_err(|e| AppError::Config(format!("invalid log level `{}`: {}", level, e)))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| AppError::Other(format!("failed to start logger: {}", e)))
}
