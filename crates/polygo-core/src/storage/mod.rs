mod config;

pub use config::{Config, LogConfig, SessionConfig, UiConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/polygo[-dev]/` based on POLYGO_ENV.
///
/// Set POLYGO_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("POLYGO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("polygo-dev")
    } else {
        base_dir.join("polygo")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
