use std::path::PathBuf;

/// Input options for one shortcut build.
///
/// Constructed fresh per invocation by whichever front-end collects them; an
/// empty `script` models the "nothing selected" state and is rejected by
/// [`ShortcutBuilder::build`](crate::services::shortcut::ShortcutBuilder::build),
/// not by this type.
#[derive(Debug, Clone, Default)]
pub struct ShortcutRequest {
    /// Path to the Python script the shortcut should launch.
    pub script: PathBuf,

    /// Image to convert into the shortcut icon. `None` keeps the
    /// interpreter's embedded icon.
    pub image: Option<PathBuf>,

    /// Display name for the shortcut. `None` or blank falls back to the
    /// script's file stem.
    pub name: Option<String>,

    /// Launch through the windowless interpreter variant so no console
    /// window appears.
    pub hide_console: bool,
}

impl ShortcutRequest {
    /// The shortcut name: the trimmed display name when one was given, else
    /// the script's file name without its extension. Never empty.
    pub fn shortcut_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => self
                .script
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                // every validated script has a stem; keep the invariant anyway
                .unwrap_or_else(|| "script".to_string()),
        }
    }
}
