//! Error types for the shortcut-building pipeline.
//!
//! Two classes matter to callers: fatal errors abort the build before the
//! `.lnk` is written, recoverable ones degrade to the interpreter's default
//! icon and are reported as warnings while the build continues.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pypin operations.
#[derive(Debug, Error)]
pub enum PypinError {
    // Request validation
    #[error("No Python script selected")]
    MissingScript,

    #[error("Script not found: {0}")]
    ScriptNotFound(PathBuf),

    // Interpreter discovery
    #[error("No Python interpreter found on PATH")]
    PythonNotFound,

    // Icon pipeline (recoverable: the build falls back to the interpreter icon)
    #[error("Image not found: {0}")]
    ImageNotFound(PathBuf),

    #[error("Icon conversion failed for {path}: {message}")]
    IconConversion { path: PathBuf, message: String },

    // Shortcut persistence
    #[error("No desktop folder found for this user")]
    DesktopNotFound,

    #[error("Failed to write shortcut {path}: {message}")]
    ShortcutWrite { path: PathBuf, message: String },

    // Ambient filesystem / serialization errors (preferences etc.)
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Result type alias for pypin operations.
pub type Result<T> = std::result::Result<T, PypinError>;

impl From<std::io::Error> for PypinError {
    fn from(err: std::io::Error) -> Self {
        PypinError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for PypinError {
    fn from(err: serde_json::Error) -> Self {
        PypinError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl PypinError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        PypinError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether the build pipeline continues past this error with a fallback
    /// value instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PypinError::ImageNotFound(_) | PypinError::IconConversion { .. }
        )
    }
}
