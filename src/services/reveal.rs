//! Opens an Explorer window with a freshly written shortcut highlighted.

use std::path::Path;
use tracing::debug;

/// Ask Explorer to show `path` selected in its parent folder.
///
/// Fire and forget: spawn failures are logged and swallowed, the pinned
/// shortcut already exists either way.
#[cfg(windows)]
pub fn reveal_in_explorer(path: &Path) {
    use std::os::windows::process::CommandExt;
    use std::process::Command;
    use tracing::warn;
    const CREATE_NO_WINDOW: u32 = 0x08000000;

    let result = Command::new("explorer")
        .arg(format!("/select,{}", path.display()))
        .creation_flags(CREATE_NO_WINDOW)
        .spawn();

    match result {
        Ok(_) => debug!("revealed {} in Explorer", path.display()),
        Err(e) => warn!("could not launch Explorer for {}: {}", path.display(), e),
    }
}

/// Shortcut files only mean something to Windows; elsewhere this is a no-op.
#[cfg(not(windows))]
pub fn reveal_in_explorer(path: &Path) {
    debug!("reveal skipped for {}: not running on Windows", path.display());
}
