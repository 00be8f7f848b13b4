//! Logging setup
//!
//! File-based tracing behind a `--debug` flag. The TUI owns the terminal, so
//! nothing is ever written to stdout/stderr: debug mode appends to a
//! daily-rolling file under the data directory and normal runs stay silent.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Logging configuration, built up before `init_logging`.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    debug_mode: bool,
    log_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = Some(dir);
        self
    }
}

/// Default log directory: `<data-dir>/forgetme/logs`.
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("forgetme")
        .join("logs")
}

/// Initialize the global tracing subscriber.
///
/// Returns the appender guard that must stay alive for the process lifetime;
/// dropping it stops the background writer. Without `--debug` no subscriber
/// is installed and every tracing macro is a no-op.
pub fn init_logging(config: LogConfig) -> Result<Option<WorkerGuard>> {
    if !config.debug_mode {
        return Ok(None);
    }

    let dir = config.log_dir.unwrap_or_else(log_dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {dir:?}"))?;

    let appender = tracing_appender::rolling::daily(&dir, "forgetme.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("FORGETME_LOG")
        .unwrap_or_else(|_| EnvFilter::new("forgetme=debug,info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!("Debug logging enabled, writing to {:?}", dir);
    Ok(Some(guard))
}

/// Remove log files older than `max_age_days`. Returns how many were removed.
pub fn cleanup_old_logs(max_age_days: u64) -> Result<usize> {
    let dir = log_dir();
    if !dir.exists() {
        return Ok(0);
    }

    let cutoff = Utc::now() - chrono::Duration::days(max_age_days as i64);
    let mut removed = 0;

    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let modified: DateTime<Utc> = match entry.metadata().and_then(|m| m.modified()) {
            Ok(time) => time.into(),
            Err(_) => continue,
        };
        if modified < cutoff && std::fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new()
            .with_debug_mode(true)
            .with_log_dir(PathBuf::from("/tmp/logs"));
        assert!(config.debug_mode);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn test_init_without_debug_is_noop() {
        let guard = init_logging(LogConfig::new()).expect("init");
        assert!(guard.is_none());
    }
}
