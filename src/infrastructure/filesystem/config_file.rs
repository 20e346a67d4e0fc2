//! Whole-file operations on generated config files.
//!
//! Each helper opens, uses and releases its handle within the call. A missing
//! file is a regular outcome for reads and removals, never an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::common::result::{CloudBuildResult, ResultExt};

/// Read the whole file, or `None` if it does not exist
pub fn read_if_exists(path: &Path) -> CloudBuildResult<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Config file not found: {}", path.display());
            Ok(None)
        }
        Err(e) => Err(e).with_filesystem_error(
            format!("Failed to read {}", path.display()),
            Some(path.to_path_buf()),
        ),
    }
}

/// Replace the file's contents, creating the file if needed.
/// The parent directory must already exist.
pub fn write(path: &Path, contents: &str) -> CloudBuildResult<()> {
    fs::write(path, contents).with_filesystem_error(
        format!("Failed to write {}", path.display()),
        Some(path.to_path_buf()),
    )?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Delete the file. Returns whether a file was actually removed.
pub fn remove_if_exists(path: &Path) -> CloudBuildResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_filesystem_error(
            format!("Failed to remove {}", path.display()),
            Some(path.to_path_buf()),
        ),
    }
}

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Path) -> CloudBuildResult<()> {
    fs::create_dir_all(dir).with_filesystem_error(
        format!("Failed to create directory {}", dir.display()),
        Some(dir.to_path_buf()),
    )
}
