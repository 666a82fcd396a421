use anyhow::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "splitter.log";

fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("resizable-splitter"))
}

pub fn log_path() -> Option<PathBuf> {
    log_dir().map(|d| d.join(LOG_FILE))
}

/// Send tracing output to the log file; stdout belongs to the TUI.
///
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init() -> Result<PathBuf> {
    let path = log_path().ok_or_else(|| anyhow::anyhow!("No cache directory"))?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(path)
}
