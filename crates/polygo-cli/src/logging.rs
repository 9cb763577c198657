use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use polygo_core::storage::{data_dir, LogConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Send `tracing` output to `<data_dir>/polygo.log`.
///
/// The terminal belongs to the UI, so there is no stderr fallback: if the
/// file cannot be opened the session simply runs without logs. Returns the
/// log path on success.
pub fn init(config: &LogConfig) -> Option<PathBuf> {
    let filter = std::env::var("POLYGO_LOG")
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(&config.level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let path = data_dir().ok()?.join("polygo.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .ok()?;

    Some(path)
}
