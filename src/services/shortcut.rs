//! Shortcut resolution and persistence.
//!
//! The core operation of the crate: validate a request, resolve the launch
//! parameters, optionally generate an icon, and hand the result to the link
//! writer for the `.lnk` on the desktop. One pass, no retries; recoverable
//! icon problems are reported as warnings while the build continues.

use crate::error::{PypinError, Result};
use crate::services::icon;
use crate::services::interpreter::PythonEnv;
use crate::services::link::{LinkWriter, ShellLinkWriter};
use crate::services::request::ShortcutRequest;
use std::path::{self, Path, PathBuf};
use tracing::{debug, warn};

/// Launch parameters derived from a request, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedShortcut {
    /// Display name; also the `.lnk` file stem.
    pub name: String,
    /// Interpreter executable the shortcut launches.
    pub target: PathBuf,
    /// Script path, quoted as the single interpreter argument.
    pub arguments: String,
    /// Directory the script runs in (its containing folder).
    pub working_dir: PathBuf,
    /// Icon shown on the shortcut: a generated `.ico` or the interpreter
    /// executable itself.
    pub icon: PathBuf,
    /// Where the `.lnk` was written.
    pub link_path: PathBuf,
}

/// Result of a successful build: the persisted shortcut plus any
/// recoverable errors that degraded it along the way.
#[derive(Debug)]
pub struct ShortcutOutcome {
    pub shortcut: ResolvedShortcut,
    pub warnings: Vec<PypinError>,
}

/// Builds desktop shortcuts for Python scripts.
pub struct ShortcutBuilder {
    desktop_dir: PathBuf,
    python: PythonEnv,
    writer: Box<dyn LinkWriter>,
}

impl ShortcutBuilder {
    /// Builder writing to the user's desktop folder.
    pub fn new(python: PythonEnv) -> Result<Self> {
        let desktop_dir = dirs::desktop_dir().ok_or(PypinError::DesktopNotFound)?;
        Ok(Self {
            desktop_dir,
            python,
            writer: Box::new(ShellLinkWriter),
        })
    }

    /// Builder writing to an explicit folder instead of the desktop.
    pub fn with_desktop_dir(python: PythonEnv, desktop_dir: impl Into<PathBuf>) -> Self {
        Self {
            desktop_dir: desktop_dir.into(),
            python,
            writer: Box::new(ShellLinkWriter),
        }
    }

    /// Builder with an explicit folder and a substituted link writer.
    pub fn with_writer(
        python: PythonEnv,
        desktop_dir: impl Into<PathBuf>,
        writer: impl LinkWriter + 'static,
    ) -> Self {
        Self {
            desktop_dir: desktop_dir.into(),
            python,
            writer: Box::new(writer),
        }
    }

    /// Validate the request, resolve launch parameters, generate the icon
    /// when an image was supplied, and write `<desktop>/<name>.lnk`,
    /// overwriting any existing file.
    ///
    /// A relative script path is resolved against the current directory
    /// first: the persisted arguments and working directory always name the
    /// script's real location, not wherever the shortcut is later launched
    /// from.
    ///
    /// Icon problems (missing image, failed conversion) never abort the
    /// build: the shortcut keeps the interpreter's own icon and the error
    /// rides along in [`ShortcutOutcome::warnings`].
    pub fn build(&self, request: &ShortcutRequest) -> Result<ShortcutOutcome> {
        if request.script.as_os_str().is_empty() {
            return Err(PypinError::MissingScript);
        }
        if !request.script.exists() {
            return Err(PypinError::ScriptNotFound(request.script.clone()));
        }
        let script = path::absolute(&request.script)
            .map_err(|e| PypinError::io_with_path(e, &request.script))?;

        let name = request.shortcut_name();
        let target = self.python.executable(request.hide_console);
        let working_dir = script_dir(&script);

        let mut warnings = Vec::new();
        let mut icon = target.clone();
        if let Some(image) = &request.image {
            if !image.exists() {
                warn!(
                    "image {} not found, keeping interpreter icon",
                    image.display()
                );
                warnings.push(PypinError::ImageNotFound(image.clone()));
            } else {
                let dest = working_dir.join(format!("{name}_icon.ico"));
                match icon::convert(image, &dest) {
                    Ok(path) => icon = path,
                    Err(e) => {
                        warn!("{e}, keeping interpreter icon");
                        warnings.push(e);
                    }
                }
            }
        }

        let arguments = format!("\"{}\"", script.display());
        let link_path = self.desktop_dir.join(format!("{name}.lnk"));
        debug!(
            "resolved {:?}: target {}, icon {}",
            name,
            target.display(),
            icon.display()
        );

        let shortcut = ResolvedShortcut {
            name,
            target,
            arguments,
            working_dir,
            icon,
            link_path,
        };
        self.writer.write(&shortcut)?;
        debug!("wrote shortcut {}", shortcut.link_path.display());

        Ok(ShortcutOutcome { shortcut, warnings })
    }
}

/// The folder a script runs in; a path with no parent at all maps to the
/// current directory.
fn script_dir(script: &Path) -> PathBuf {
    match script.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    /// Writes the resolved target into the link file. Stands in for the
    /// Windows-only shell-link writer so builds run on any host.
    struct TestWriter;

    impl LinkWriter for TestWriter {
        fn write(&self, shortcut: &ResolvedShortcut) -> Result<()> {
            fs::write(
                &shortcut.link_path,
                shortcut.target.to_string_lossy().as_bytes(),
            )
            .map_err(|e| PypinError::io_with_path(e, &shortcut.link_path))
        }
    }

    struct FailingWriter;

    impl LinkWriter for FailingWriter {
        fn write(&self, shortcut: &ResolvedShortcut) -> Result<()> {
            Err(PypinError::ShortcutWrite {
                path: shortcut.link_path.clone(),
                message: "denied".to_string(),
            })
        }
    }

    struct Fixture {
        _root: TempDir,
        desktop: PathBuf,
        scripts: PathBuf,
        bin: PathBuf,
        python: PythonEnv,
    }

    fn fixture() -> Fixture {
        let root = TempDir::new().unwrap();
        let desktop = root.path().join("Desktop");
        let scripts = root.path().join("scripts");
        let bin = root.path().join("bin");
        fs::create_dir_all(&desktop).unwrap();
        fs::create_dir_all(&scripts).unwrap();
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("python.exe"), b"").unwrap();
        fs::write(bin.join("pythonw.exe"), b"").unwrap();
        let python = PythonEnv::from_executable(bin.join("python.exe"));
        Fixture {
            _root: root,
            desktop,
            scripts,
            bin,
            python,
        }
    }

    impl Fixture {
        fn builder(&self) -> ShortcutBuilder {
            ShortcutBuilder::with_writer(self.python.clone(), &self.desktop, TestWriter)
        }

        fn script(&self, name: &str) -> PathBuf {
            let path = self.scripts.join(name);
            fs::write(&path, "print('hello')\n").unwrap();
            path
        }
    }

    #[test]
    fn test_empty_script_rejected_before_any_write() {
        let fx = fixture();

        let err = fx.builder().build(&ShortcutRequest::default()).unwrap_err();

        assert!(matches!(err, PypinError::MissingScript));
        assert_eq!(fs::read_dir(&fx.desktop).unwrap().count(), 0);
    }

    #[test]
    fn test_nonexistent_script_rejected() {
        let fx = fixture();
        let request = ShortcutRequest {
            script: fx.scripts.join("ghost.py"),
            ..Default::default()
        };

        let err = fx.builder().build(&request).unwrap_err();

        assert!(matches!(err, PypinError::ScriptNotFound(p) if p == fx.scripts.join("ghost.py")));
        assert_eq!(fs::read_dir(&fx.desktop).unwrap().count(), 0);
    }

    #[test]
    fn test_resolves_launch_parameters() {
        let fx = fixture();
        let script = fx.script("tool.py");
        let request = ShortcutRequest {
            script: script.clone(),
            ..Default::default()
        };

        let outcome = fx.builder().build(&request).unwrap();

        let s = outcome.shortcut;
        assert_eq!(s.name, "tool");
        assert_eq!(s.target, fx.bin.join("python.exe"));
        assert_eq!(s.arguments, format!("\"{}\"", script.display()));
        assert_eq!(s.working_dir, fx.scripts);
        assert_eq!(s.icon, s.target);
        assert_eq!(s.link_path, fx.desktop.join("tool.lnk"));
        assert!(s.link_path.exists());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_windowless_request_targets_pythonw() {
        let fx = fixture();
        let request = ShortcutRequest {
            script: fx.script("tool.py"),
            hide_console: true,
            ..Default::default()
        };

        let outcome = fx.builder().build(&request).unwrap();

        assert_eq!(outcome.shortcut.target, fx.bin.join("pythonw.exe"));
    }

    #[test]
    fn test_relative_script_resolves_to_absolute_location() {
        let fx = fixture();
        fx.script("tool.py");
        env::set_current_dir(&fx.scripts).unwrap();
        let cwd = env::current_dir().unwrap();
        let request = ShortcutRequest {
            script: PathBuf::from("tool.py"),
            ..Default::default()
        };

        let outcome = fx.builder().build(&request).unwrap();

        let s = outcome.shortcut;
        assert!(s.working_dir.is_absolute());
        assert_eq!(s.working_dir, cwd);
        assert_eq!(s.arguments, format!("\"{}\"", cwd.join("tool.py").display()));
    }

    #[test]
    fn test_missing_image_degrades_with_warning() {
        let fx = fixture();
        let request = ShortcutRequest {
            script: fx.script("tool.py"),
            image: Some(fx.scripts.join("missing.png")),
            ..Default::default()
        };

        let outcome = fx.builder().build(&request).unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(outcome.warnings[0], PypinError::ImageNotFound(_)));
        assert_eq!(outcome.shortcut.icon, outcome.shortcut.target);
        assert!(outcome.shortcut.link_path.exists());
    }

    #[test]
    fn test_unreadable_image_degrades_with_warning() {
        let fx = fixture();
        let image = fx.scripts.join("broken.png");
        fs::write(&image, b"definitely not pixels").unwrap();
        let request = ShortcutRequest {
            script: fx.script("tool.py"),
            image: Some(image),
            ..Default::default()
        };

        let outcome = fx.builder().build(&request).unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(
            outcome.warnings[0],
            PypinError::IconConversion { .. }
        ));
        assert_eq!(outcome.shortcut.icon, outcome.shortcut.target);
        assert!(outcome.shortcut.link_path.exists());
    }

    #[test]
    fn test_valid_image_generates_icon_beside_script() {
        let fx = fixture();
        let image = fx.scripts.join("logo.png");
        image::RgbaImage::from_pixel(16, 16, image::Rgba([200, 40, 40, 255]))
            .save(&image)
            .unwrap();
        let request = ShortcutRequest {
            script: fx.script("tool.py"),
            image: Some(image),
            name: Some("My Tool".to_string()),
            ..Default::default()
        };

        let outcome = fx.builder().build(&request).unwrap();

        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.shortcut.icon, fx.scripts.join("My Tool_icon.ico"));
        assert!(outcome.shortcut.icon.exists());
        assert_eq!(outcome.shortcut.link_path, fx.desktop.join("My Tool.lnk"));
        assert!(outcome.shortcut.link_path.exists());
    }

    #[test]
    fn test_rebuild_overwrites_existing_shortcut() {
        let fx = fixture();
        let request = ShortcutRequest {
            script: fx.script("tool.py"),
            ..Default::default()
        };

        fx.builder().build(&request).unwrap();
        let outcome = fx.builder().build(&request).unwrap();

        assert!(outcome.shortcut.link_path.exists());
        assert_eq!(fs::read_dir(&fx.desktop).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_is_fatal() {
        let fx = fixture();
        let request = ShortcutRequest {
            script: fx.script("tool.py"),
            ..Default::default()
        };
        let builder = ShortcutBuilder::with_writer(fx.python.clone(), &fx.desktop, FailingWriter);

        let err = builder.build(&request).unwrap_err();

        assert!(matches!(err, PypinError::ShortcutWrite { .. }));
    }
}
