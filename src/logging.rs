//! Log output setup.
//!
//! The TUI owns stdout, so the upload log channels go to a file:
//! `~/.mosaiq/logs/mosaiq.log` by default. Verbosity is controlled by the
//! `MOSAIQ_LOG` environment variable (tracing env-filter syntax); the
//! default level is `info`, which is exactly the two upload channels plus
//! startup messages.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const ENV_LOG_FILTER: &str = "MOSAIQ_LOG";

/// Default log file path: `~/.mosaiq/logs/mosaiq.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mosaiq").join("logs").join("mosaiq.log"))
}

/// Open the log file in append mode, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize file logging.
///
/// Returns the path being written to. Calling this more than once is
/// harmless; later calls keep the first subscriber.
pub fn init(path: Option<PathBuf>) -> io::Result<PathBuf> {
    let path = match path.or_else(default_log_path) {
        Some(path) => path,
        None => {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine home directory for log file",
            ))
        }
    };

    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(path)
}
