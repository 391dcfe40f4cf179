//! pypin - desktop shortcut builder for Python scripts.
//!
//! Takes a Python script, an optional image, an optional display name and a
//! console-visibility flag, and produces a Windows desktop shortcut (`.lnk`)
//! that launches the script with the right interpreter executable, optionally
//! converting the image into a multi-resolution icon.
//!
//! # Example
//!
//! ```rust,ignore
//! use pypin::{PythonEnv, ShortcutBuilder, ShortcutRequest};
//!
//! fn main() -> pypin::Result<()> {
//!     let python = PythonEnv::detect()?;
//!     let builder = ShortcutBuilder::new(python)?;
//!     let outcome = builder.build(&ShortcutRequest {
//!         script: "C:\\scripts\\tool.py".into(),
//!         ..Default::default()
//!     })?;
//!     println!("pinned {}", outcome.shortcut.link_path.display());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod services;

// Re-export commonly used types
pub use error::{PypinError, Result};
pub use services::interpreter::PythonEnv;
pub use services::link::{LinkWriter, ShellLinkWriter};
pub use services::request::ShortcutRequest;
pub use services::settings::{Preferences, PreferencesStore};
pub use services::shortcut::{ResolvedShortcut, ShortcutBuilder, ShortcutOutcome};
