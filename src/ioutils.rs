use std::path::{Path, PathBuf};

use crate::constants::VARIABLES_PATHS_SEPARATOR;
use crate::error::{Error, Result};
use crate::ext::PathExt;

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, replacing an existing file and creating
/// missing parent directories. Relative paths resolve against the current directory.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let base_path = std::env::current_dir().unwrap_or_default();
    let abs_path = if dest_path.is_absolute() {
        dest_path.to_path_buf()
    } else {
        base_path.join(dest_path)
    };

    if let Some(parent) = abs_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(abs_path, content).map_err(Error::IoError)
}

/// Splits comma-separated variable paths, trims them, drops empty entries and
/// normalizes each path lexically.
pub fn split_variables_paths<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .flat_map(|entry| entry.as_ref().split(VARIABLES_PATHS_SEPARATOR))
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(|path| Path::new(path).normalize().to_string_lossy().into_owned())
        .collect()
}

/// Normalizes the output root the same way variable paths are.
pub fn normalize_output_dir<P: AsRef<Path>>(output_dir: P) -> PathBuf {
    output_dir.as_ref().normalize()
}
