//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily file
//! named `dayfocus_<date>.log` in the configured log directory (default:
//! `~/.local/share/dayfocus/logs/`).

use crate::config::{expand_tilde, LoggingConfig};
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Path of today's log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    log_dir.join(format!("dayfocus_{}.log", date))
}

/// Install the global subscriber. Returns the log file in use, or `None` when
/// logging is disabled.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level: Level = config
        .level
        .parse()
        .map_err(|_| anyhow!("Unsupported log level `{}`", config.level))?;

    let log_dir = expand_tilde(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_file_path(&log_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_is_dated() {
        let path = log_file_path(Path::new("/logs"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("dayfocus_"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "dayfocus_YYYY-MM-DD.log".len());
        assert_eq!(path.parent(), Some(Path::new("/logs")));
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert_eq!(init_logging(&config).unwrap(), None);
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            enabled: true,
            log_dir: dir.path().display().to_string(),
            level: "chatty".into(),
        };
        assert!(init_logging(&config).is_err());
    }
}
