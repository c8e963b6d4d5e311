//! Log setup
//!
//! The terminal is owned by the TUI while the app runs, so log output goes
//! to a file in the platform data directory instead of stderr.

use anyhow::Result;
use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "address-book.log";

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "address_book=info";

/// Location of the log file, if the platform has a data directory
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("br", "address-book", "address-book")
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Open the log file for appending, creating parent directories
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

fn subscriber(filter: EnvFilter, file: File) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file)),
    )
}

/// Install the global subscriber.
///
/// Returns the log file path, or `None` when there is nowhere to write and
/// logging stays off.
pub fn init() -> Result<Option<PathBuf>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    subscriber(filter, file).init();
    Ok(Some(path))
}
