//! Icon generation for shortcuts.
//!
//! Converts an arbitrary raster image into a Windows icon container holding
//! the four resolutions Explorer samples for desktop shortcuts.

use crate::error::{PypinError, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raster sizes embedded in every generated icon.
pub const ICON_SIZES: [u32; 4] = [32, 48, 64, 256];

/// Convert `source` into a multi-resolution `.ico` at `dest`.
///
/// Any failure (unreadable image, encode error, write error) maps to
/// [`PypinError::IconConversion`], which callers treat as recoverable by
/// falling back to the interpreter's own icon. An existing file at `dest`
/// is overwritten.
pub fn convert(source: &Path, dest: &Path) -> Result<PathBuf> {
    let img = image::open(source).map_err(|e| conversion_error(source, e))?;

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in ICON_SIZES {
        let resized = img.resize_exact(size, size, image::imageops::FilterType::Lanczos3);
        let rgba = resized.to_rgba8();
        let icon_image = ico::IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry =
            ico::IconDirEntry::encode(&icon_image).map_err(|e| conversion_error(source, e))?;
        icon_dir.add_entry(entry);
    }

    let file = File::create(dest).map_err(|e| conversion_error(source, e))?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| conversion_error(source, e))?;

    debug!("wrote {} with sizes {:?}", dest.display(), ICON_SIZES);
    Ok(dest.to_path_buf())
}

fn conversion_error(source: &Path, err: impl std::fmt::Display) -> PypinError {
    PypinError::IconConversion {
        path: source.to_path_buf(),
        message: err.to_string(),
    }
}
