//! Python interpreter discovery and variant selection.
//!
//! The shortcut targets one of two executables that ship side by side in a
//! Python installation: the console-attached `python.exe` or the windowless
//! `pythonw.exe`. Discovery of the installation is an environment lookup;
//! picking the variant is pure path logic.

use crate::error::{PypinError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Console-attached interpreter executable name.
const CONSOLE_EXE: &str = "python.exe";
/// Windowless interpreter executable name.
const WINDOWLESS_EXE: &str = "pythonw.exe";

/// A located Python installation, anchored at one base executable.
#[derive(Debug, Clone)]
pub struct PythonEnv {
    base: PathBuf,
}

impl PythonEnv {
    /// Wrap an explicitly chosen interpreter executable.
    pub fn from_executable(path: impl Into<PathBuf>) -> Self {
        Self { base: path.into() }
    }

    /// Locate a Python installation by scanning `PATH`.
    pub fn detect() -> Result<Self> {
        let path_var = env::var_os("PATH").unwrap_or_default();
        match Self::scan(env::split_paths(&path_var)) {
            Some(base) => {
                debug!("found Python interpreter at {}", base.display());
                Ok(Self { base })
            }
            None => Err(PypinError::PythonNotFound),
        }
    }

    /// First directory on the search path holding a known interpreter name.
    fn scan(dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
        for dir in dirs {
            for name in Self::base_candidates() {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }

    #[cfg(windows)]
    fn base_candidates() -> &'static [&'static str] {
        &[CONSOLE_EXE]
    }

    #[cfg(not(windows))]
    fn base_candidates() -> &'static [&'static str] {
        &["python3", "python", CONSOLE_EXE]
    }

    /// The base executable this environment is anchored at.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve the executable a shortcut should target.
    ///
    /// Picks the windowless variant when the console is to be hidden, the
    /// console variant otherwise. When the chosen variant is not present
    /// beside the base executable, the base itself is returned; resolution
    /// never fails.
    pub fn executable(&self, hide_console: bool) -> PathBuf {
        let variant = if hide_console { WINDOWLESS_EXE } else { CONSOLE_EXE };
        if let Some(dir) = self.base.parent() {
            let candidate = dir.join(variant);
            if candidate.exists() {
                return candidate;
            }
        }
        self.base.clone()
    }
}
