//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to a size-capped rolling log
//! file and keeps the most recent lines in memory. Records emitted through
//! the `log` facade are forwarded to the same subscriber.

mod buffer;
mod writer;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::Local;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

pub use buffer::RecentLines;
pub use writer::RollingWriter;

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub app_name: String,
    /// Rotate once the active file would grow past this many bytes
    pub max_bytes: u64,
    /// Number of rotated backups to keep
    pub max_files: usize,
    /// Lines kept in memory for `recent_lines`
    pub buffer_lines: usize,
    pub level: Level,
}

impl LoggerConfig {
    pub fn new(log_dir: impl Into<PathBuf>, app_name: impl Into<String>) -> Self {
        Self {
            log_dir: log_dir.into(),
            app_name: app_name.into(),
            max_bytes: 1024 * 1024,
            max_files: 5,
            buffer_lines: 200,
            level: Level::INFO,
        }
    }
}

struct LoggerState {
    log_file: PathBuf,
    recent: Arc<Mutex<RecentLines>>,
}

static STATE: OnceLock<LoggerState> = OnceLock::new();

/// Local wall-clock timestamps
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize logging into `{log_dir}/{app_name}.log` with default limits
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    init_with_config(LoggerConfig::new(log_dir.as_ref(), app_name))
}

/// Initialize logging; fails if a global subscriber is already installed
pub fn init_with_config(config: LoggerConfig) -> Result<(), String> {
    if STATE.get().is_some() {
        return Err("Logger already initialized".to_string());
    }

    let recent = Arc::new(Mutex::new(RecentLines::new(config.buffer_lines)));
    let writer = RollingWriter::open(
        &config.log_dir,
        &config.app_name,
        config.max_bytes,
        config.max_files,
        recent.clone(),
    )
    .map_err(|e| format!("Failed to open log file in {}: {}", config.log_dir.display(), e))?;
    let log_file = writer.path().to_path_buf();

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(writer))
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_max_level(config.level)
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    STATE
        .set(LoggerState { log_file, recent })
        .map_err(|_| "Logger already initialized".to_string())?;

    tracing::info!(target: "rolling_logger", "{} logging started", config.app_name);
    Ok(())
}

fn state() -> Result<&'static LoggerState, String> {
    STATE.get().ok_or_else(|| "Logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    state()?;
    tracing::info!(target: "rolling_logger", "{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    state()?;
    tracing::error!(target: "rolling_logger", "{}", msg);
    Ok(())
}

/// Path of the active log file, once initialized
pub fn log_file() -> Option<PathBuf> {
    STATE.get().map(|s| s.log_file.clone())
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    STATE
        .get()
        .and_then(|s| s.recent.lock().ok().map(|recent| recent.lines()))
        .unwrap_or_default()
}
