//! Shell-link persistence.
//!
//! Writing the `.lnk` file is the one step of the pipeline that only works
//! on Windows, so it sits behind the [`LinkWriter`] trait: production uses
//! the shell-link format through `mslnk`, tests substitute their own writer
//! and run on any host.

use crate::error::{PypinError, Result};
use crate::services::shortcut::ResolvedShortcut;

/// Persists a resolved shortcut at its `link_path`.
pub trait LinkWriter {
    fn write(&self, shortcut: &ResolvedShortcut) -> Result<()>;
}

/// Writer emitting the Windows shell-link format. On other hosts the write
/// is refused.
#[derive(Debug, Default)]
pub struct ShellLinkWriter;

#[cfg(windows)]
impl LinkWriter for ShellLinkWriter {
    fn write(&self, shortcut: &ResolvedShortcut) -> Result<()> {
        use mslnk::ShellLink;

        let mut link = ShellLink::new(&shortcut.target)
            .map_err(|e| persist_error(shortcut, e))?;
        link.set_name(Some(shortcut.name.clone()));
        link.set_arguments(Some(shortcut.arguments.clone()));
        link.set_working_dir(Some(shortcut.working_dir.to_string_lossy().into_owned()));
        link.set_icon_location(Some(shortcut.icon.to_string_lossy().into_owned()));
        link.create_lnk(&shortcut.link_path)
            .map_err(|e| persist_error(shortcut, e))
    }
}

#[cfg(not(windows))]
impl LinkWriter for ShellLinkWriter {
    fn write(&self, shortcut: &ResolvedShortcut) -> Result<()> {
        Err(PypinError::ShortcutWrite {
            path: shortcut.link_path.clone(),
            message: "shell links can only be written on Windows".to_string(),
        })
    }
}

#[cfg(windows)]
fn persist_error(shortcut: &ResolvedShortcut, err: impl std::fmt::Display) -> PypinError {
    PypinError::ShortcutWrite {
        path: shortcut.link_path.clone(),
        message: err.to_string(),
    }
}
