//! Fan-out output files
//!
//! In multiple mode every row is written to its own file. The file is named
//! by the row's key field, or synthesized from the key used as a file name
//! pattern (`page.html` becomes `page-001.html`, `page-002.html`, ...).

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::context::{Context, scalar_to_string};
use crate::error::{Result, fs};

/// File name for the row at `index` (1-based).
///
/// A field value that would leave the output directory (`..`, an absolute
/// path) is not used; the synthesized name takes its place.
pub fn output_name(key: &str, row: &Context, index: usize) -> PathBuf {
    match row.get(key).and_then(scalar_to_string) {
        Some(name) if !name.is_empty() && stays_inside(Path::new(&name)) => PathBuf::from(name),
        Some(name) if !name.is_empty() => {
            warn!(
                row = index,
                name = %name,
                "field value escapes the output directory, synthesizing a name"
            );
            synthesized_name(key, index)
        }
        _ => synthesized_name(key, index),
    }
}

/// True when `path` only has normal or `.` components.
fn stays_inside(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// `stem-NNN.ext` in the pattern's directory, or `stem-NNN` without an extension.
pub fn synthesized_name(pattern: &str, index: usize) -> PathBuf {
    let path = Path::new(pattern);
    let stem = path
        .file_stem()
        .map_or_else(|| pattern.to_string(), |s| s.to_string_lossy().into_owned());
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}-{index:03}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{index:03}"),
    };
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

/// Write `contents` to `path` through a temporary file in the same directory.
///
/// The target only appears once the whole file is written.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let shown = path.display().to_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(|e| fs::write_failed(&shown, e.to_string()))?;

    let mut temp =
        NamedTempFile::new_in(&dir).map_err(|e| fs::write_failed(&shown, e.to_string()))?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| fs::write_failed(&shown, e.to_string()))?;
    temp.persist(path)
        .map_err(|e| fs::write_failed(&shown, e.error.to_string()))?;

    debug!(path = %shown, bytes = contents.len(), "wrote output file");
    Ok(())
}
