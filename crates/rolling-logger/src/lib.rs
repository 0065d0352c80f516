//! Rolling Logger
//!
//! `tracing` subscriber that writes every event to stderr and to a
//! size-capped circular set of log files:
//! `{app}.log` (current), `{app}.log.1` (previous) ... `{app}.log.{N}`.
//! When the current file would exceed its byte budget the files shift by one
//! and the oldest is dropped.

mod rolling_file;

use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub use rolling_file::{RollingFile, RollingWriter};

/// Size budget of a single log file
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
/// Rotated files kept next to the current one
pub const DEFAULT_MAX_FILES: usize = 4;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Logger setup errors
#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    AlreadyInitialized,
    Subscriber(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::Subscriber(msg) => write!(f, "Failed to install subscriber: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `default_filter` when set.
pub fn init_logger(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    default_filter: &str,
) -> Result<(), LoggerError> {
    if INITIALIZED.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)?;
    let file = RollingFile::open(log_dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)?;
    let mut writer = RollingWriter::new(file);

    writeln!(
        writer,
        "===== {} started {} =====",
        app_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
    )?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    let _ = INITIALIZED.set(());
    tracing::info!(log_dir = %log_dir.display(), "{} logger initialized", app_name);
    Ok(())
}
