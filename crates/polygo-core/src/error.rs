//! Core error types for polygo-core.
//!
//! Only persistence failures are ever shown to the operator. Parse failures
//! on the duration fields and empty capture text are absorbed where they
//! happen and never reach this module.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for polygo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A ledger index was addressed beyond the current length.
    ///
    /// The phase controller never produces one of these; seeing it means the
    /// ranking cursor or a bucket holds a corrupted index.
    #[error("Index {index} out of range for idea ledger (length: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The ranking cursor already sits at the end of the ledger.
    #[error("No more ideas to rank")]
    NoMoreIdeas,

    /// Writing the session document failed
    #[error("Failed to write session to {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl CoreError {
    /// True for the errors that indicate broken ranking state rather than
    /// an environmental failure.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            CoreError::IndexOutOfRange { .. } | CoreError::NoMoreIdeas
        )
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
