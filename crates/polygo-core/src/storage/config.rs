//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Where the session document is written
//! - Panel and text colors handed to the renderer
//! - Log verbosity
//!
//! Configuration is stored at `~/.config/polygo/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::export::{SessionExporter, DEFAULT_OUTPUT_FILE};

/// Session output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Resolved against the working directory when relative.
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

/// Rendering configuration.
///
/// Colors are strings the renderer parses: `#RRGGBB`, a color name, or a
/// 256-color palette index such as `"62"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_header_color")]
    pub header_color: String,
    #[serde(default = "default_cursor_line_color")]
    pub cursor_line_color: String,
    #[serde(default = "default_accent_color")]
    pub capture_border_color: String,
    #[serde(default = "default_muted_border_color")]
    pub ledger_border_color: String,
    #[serde(default = "default_accent_color")]
    pub ranking_border_color: String,
    #[serde(default = "default_header_color")]
    pub favorites_border_color: String,
    #[serde(default = "default_muted_border_color")]
    pub polishing_border_color: String,
    #[serde(default = "default_help_color")]
    pub help_color: String,
    #[serde(default = "default_true")]
    pub show_help: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive. `POLYGO_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/polygo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

// Default functions
fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.into()
}
fn default_header_color() -> String {
    "#FF06B7".into()
}
fn default_cursor_line_color() -> String {
    "57".into()
}
fn default_accent_color() -> String {
    "62".into()
}
fn default_muted_border_color() -> String {
    "238".into()
}
fn default_help_color() -> String {
    "241".into()
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            header_color: default_header_color(),
            cursor_line_color: default_cursor_line_color(),
            capture_border_color: default_accent_color(),
            ledger_border_color: default_muted_border_color(),
            ranking_border_color: default_accent_color(),
            favorites_border_color: default_header_color(),
            polishing_border_color: default_muted_border_color(),
            help_color: default_help_color(),
            show_help: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults there if the file
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(ConfigError::from)?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Exporter writing to the configured output file.
    pub fn exporter(&self) -> SessionExporter {
        SessionExporter::new(&self.session.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.session.output_file, "IDEAS.md");
        assert_eq!(parsed.ui.header_color, "#FF06B7");
        assert!(parsed.ui.show_help);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[ui]\nshow_help = false\n").unwrap();
        assert!(!parsed.ui.show_help);
        assert_eq!(parsed.ui.help_color, "241");
        assert_eq!(parsed.session.output_file, "IDEAS.md");
        assert_eq!(parsed.log.level, "info");
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.session.output_file, "IDEAS.md");
        assert!(path.exists());
    }

    #[test]
    fn load_from_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\noutput_file = \"brainstorm.md\"\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.session.output_file, "brainstorm.md");
        assert_eq!(cfg.exporter().path(), Path::new("brainstorm.md"));
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session\noutput_file = 3").unwrap();
        let result = Config::load_from(&path);
        assert!(matches!(
            result,
            Err(crate::error::CoreError::Config(ConfigError::ParseFailed(_)))
        ));
    }
}
