//! Persisted user preferences.
//!
//! The one piece of state that outlives a run: theme choice for front-ends,
//! the default for the windowless flag, and where the user last pinned from.
//! Loaded at startup, saved at shutdown; a missing or damaged file just
//! means defaults.

use crate::error::{PypinError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Preferences {
    /// Whether front-ends render in dark mode (default: on).
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Default for the hide-console flag when the caller leaves it unset.
    #[serde(default)]
    pub hide_console: bool,

    /// Directory of the last successfully pinned script.
    #[serde(default)]
    pub last_script_dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Preferences {
    /// Console visibility for one run. An explicit console request wins,
    /// then the windowless flag; the stored value is only the default for
    /// when neither flag is given.
    pub fn resolve_hide_console(&self, windowless: bool, console: bool) -> bool {
        if console {
            false
        } else {
            windowless || self.hide_console
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            hide_console: false,
            last_script_dir: None,
        }
    }
}

/// Loads and saves [`Preferences`] as JSON in the local app-data folder.
pub struct PreferencesStore {
    file_path: PathBuf,
}

impl PreferencesStore {
    /// Store under `%LOCALAPPDATA%\pypin\settings.json` (or the platform
    /// equivalent), creating the folder on first use.
    pub fn new() -> Self {
        let app_data = dirs::data_local_dir().unwrap_or(PathBuf::from("."));
        let folder = app_data.join("pypin");
        if !folder.exists() {
            let _ = fs::create_dir_all(&folder);
        }
        Self {
            file_path: folder.join("settings.json"),
        }
    }

    /// Store at an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    /// Load preferences, falling back to defaults when the file is missing,
    /// unreadable, or not valid JSON.
    pub fn load(&self) -> Preferences {
        if self.file_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.file_path) {
                if let Ok(prefs) = serde_json::from_str(&content) {
                    return prefs;
                }
            }
        }
        Preferences::default()
    }

    /// Save preferences, creating parent folders as needed.
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| PypinError::io_with_path(e, parent))?;
        }
        let content = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.file_path, content)
            .map_err(|e| PypinError::io_with_path(e, &self.file_path))?;
        debug!("saved preferences to {}", self.file_path.display());
        Ok(())
    }
}

impl Default for PreferencesStore {
    fn default() -> Self {
        Self::new()
    }
}
